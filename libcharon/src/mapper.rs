use emitter::EmitIntermediate;
use errors::*;

/// The `MapInputKV` is a struct for passing input data to a `Map`.
///
/// `MapInputKV` is a thin wrapper around a `(key, value)` pair, where the key is the name of the
/// input split (usually its path) and the value is the full content of that split.
/// It can be constructed normally or using `MapInputKV::new()`.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct MapInputKV {
    pub key: String,
    pub value: String,
}

impl MapInputKV {
    pub fn new(key: String, value: String) -> Self {
        MapInputKV {
            key: key,
            value: value,
        }
    }
}

/// `KeyValue` is a single intermediate key-value pair as outputted from a map operation.
///
/// Pairs are immutable once emitted: the partitioner routes them and the intermediate writer
/// serialises them unchanged.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(key: String, value: String) -> Self {
        KeyValue {
            key: key,
            value: value,
        }
    }
}

/// The `Map` trait defines a function for performing a map operation.
///
/// Implementations are supplied by the job author and invoked exactly once per map task. The
/// runner treats the implementation as opaque: the emitted pairs are never interpreted or
/// validated, and an error returned from `map` aborts the whole task.
///
/// # Arguments
///
/// * `input` - The input data for the map operation.
/// * `emitter` - A struct implementing the `EmitIntermediate` trait, provided by the map runner.
///
/// # Outputs
///
/// An empty result used for returning an error. Outputs of the map operation are sent out through
/// the `emitter`.
pub trait Map {
    fn map<E>(&self, input: MapInputKV, emitter: E) -> Result<()>
    where
        E: EmitIntermediate;
}
