use std::hash::Hasher;

use fnv::FnvHasher;

use errors::*;
use mapper::KeyValue;

// The raw hash is masked to the non-negative range of a signed 64-bit integer before the modulo,
// so a bucket index can never be derived from a value with the sign bit set.
const HASH_SIGN_MASK: u64 = 0x7fff_ffff_ffff_ffff;

/// The `Partition` trait defines a function for assigning the key of a map output pair to a
/// reduce bucket.
///
/// The assignment must be pure and deterministic: the same key must resolve to the same bucket
/// within a single invocation, across repeated invocations with the same bucket count, and on
/// the reduce side of the pipeline.
///
/// # Arguments
///
/// * `key` - The key of an output pair of a map operation.
///
/// # Outputs
///
/// A `Result<u64>`, representing the output partition for the given key.
pub trait Partition {
    fn partition(&self, key: &str) -> Result<u64>;
}

/// `HashPartitioner` implements `Partition` by hashing the key with FNV-1a.
///
/// FNV-1a is stable across processes and toolchains, so the map side and the eventual reduce
/// side always agree on the bucket for a key.
pub struct HashPartitioner {
    partition_count: u64,
}

impl HashPartitioner {
    pub fn new(partition_count: u64) -> Self {
        HashPartitioner { partition_count }
    }

    fn calculate_hash(&self, key: &str) -> u64 {
        let mut hasher = FnvHasher::default();
        hasher.write(key.as_bytes());
        hasher.finish() & HASH_SIGN_MASK
    }
}

impl Partition for HashPartitioner {
    fn partition(&self, key: &str) -> Result<u64> {
        if self.partition_count == 0 {
            return Err("Can not partition with a partition count of 0.".into());
        }
        let hash = self.calculate_hash(key);
        Ok(hash % self.partition_count)
    }
}

/// `partition_pairs` groups a sequence of map output pairs into `reduce_count` ordered buckets.
///
/// The sequence is iterated once and each pair is appended to exactly one bucket, so the
/// multiset union of the buckets equals the input sequence. Relative order within a bucket
/// follows emission order. A partitioner returning a bucket outside `[0, reduce_count)` is a
/// contract violation and is reported as an error, never an out-of-bounds write.
pub fn partition_pairs<P>(
    pairs: Vec<KeyValue>,
    reduce_count: u64,
    partitioner: &P,
) -> Result<Vec<Vec<KeyValue>>>
where
    P: Partition,
{
    let mut buckets: Vec<Vec<KeyValue>> = Vec::new();
    for _ in 0..reduce_count {
        buckets.push(Vec::new());
    }

    for pair in pairs {
        let bucket = partitioner.partition(&pair.key).chain_err(|| {
            format!("Error partitioning key {:?}.", pair.key)
        })?;
        if bucket >= reduce_count {
            return Err(
                format!(
                    "Partitioner returned bucket {} for a reduce count of {}.",
                    bucket,
                    reduce_count
                ).into(),
            );
        }
        buckets[bucket as usize].push(pair);
    }

    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_partitioner_is_deterministic_across_instances() {
        let keys = vec!["a", "b", "the quick brown fox", "κλειδί", ""];
        let first = HashPartitioner::new(7);
        let second = HashPartitioner::new(7);

        for key in keys {
            let bucket = first.partition(key).unwrap();
            assert_eq!(bucket, second.partition(key).unwrap());
            assert_eq!(bucket, first.partition(key).unwrap());
        }
    }

    #[test]
    fn hash_partitioner_buckets_stay_in_range() {
        let keys = vec![
            "foo",
            "bar",
            "baz",
            "zar",
            "lorem ipsum dolor sit amet",
            "0",
            "\n",
        ];

        for partition_count in 1..9 {
            let partitioner = HashPartitioner::new(partition_count);
            for key in &keys {
                let bucket = partitioner.partition(key).unwrap();
                assert!(bucket < partition_count);
            }
        }
    }

    #[test]
    fn hash_partitioner_rejects_zero_partition_count() {
        let partitioner = HashPartitioner::new(0);

        assert!(partitioner.partition("foo").is_err());
    }

    #[test]
    fn partition_pairs_routes_equal_keys_together() {
        let pairs = vec![
            KeyValue::new("a".to_owned(), "1".to_owned()),
            KeyValue::new("b".to_owned(), "1".to_owned()),
            KeyValue::new("a".to_owned(), "2".to_owned()),
        ];
        let partitioner = HashPartitioner::new(4);

        let buckets = partition_pairs(pairs, 4, &partitioner).unwrap();

        let buckets_with_a: Vec<&Vec<KeyValue>> = buckets
            .iter()
            .filter(|bucket| bucket.iter().any(|pair| pair.key == "a"))
            .collect();
        assert_eq!(1, buckets_with_a.len());
        assert_eq!(2, buckets_with_a[0].iter().filter(|p| p.key == "a").count());
    }

    #[test]
    fn partition_pairs_loses_and_duplicates_nothing() {
        let mut pairs = Vec::new();
        for i in 0..100 {
            pairs.push(KeyValue::new(format!("key-{}", i % 13), format!("{}", i)));
        }
        let partitioner = HashPartitioner::new(5);

        let buckets = partition_pairs(pairs.clone(), 5, &partitioner).unwrap();

        assert_eq!(5, buckets.len());
        let mut recovered: Vec<KeyValue> = buckets.into_iter().flat_map(|b| b).collect();
        let mut expected = pairs;
        recovered.sort_by(|a, b| (&a.key, &a.value).cmp(&(&b.key, &b.value)));
        expected.sort_by(|a, b| (&a.key, &a.value).cmp(&(&b.key, &b.value)));
        assert_eq!(expected, recovered);
    }

    #[test]
    fn partition_pairs_rejects_out_of_range_bucket() {
        struct BrokenPartitioner;
        impl Partition for BrokenPartitioner {
            fn partition(&self, _key: &str) -> Result<u64> {
                Ok(99)
            }
        }

        let pairs = vec![KeyValue::new("foo".to_owned(), "bar".to_owned())];

        let result = partition_pairs(pairs, 2, &BrokenPartitioner);

        assert!(result.is_err());
    }

    #[test]
    fn partition_pairs_creates_empty_buckets() {
        let buckets = partition_pairs(Vec::new(), 3, &HashPartitioner::new(3)).unwrap();

        assert_eq!(3, buckets.len());
        for bucket in buckets {
            assert!(bucket.is_empty());
        }
    }
}
