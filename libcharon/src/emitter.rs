use errors::*;
use mapper::KeyValue;

/// The `EmitIntermediate` trait specifies structs which can send key-value pairs to an in-memory
/// data structure.
///
/// Since the emitted pairs will eventually be serialised to disk, the sink must preserve both
/// the order of emission and any duplicate pairs.
pub trait EmitIntermediate {
    /// Takes ownership of a key-value pair and moves it somewhere else.
    ///
    /// Returns an empty `Result` used for error handling.
    fn emit(&mut self, key: String, value: String) -> Result<()>;
}

/// A struct implementing `EmitIntermediate` which emits to a `Vec` of `KeyValue`s.
pub struct IntermediateVecEmitter<'a> {
    sink: &'a mut Vec<KeyValue>,
}

impl<'a> IntermediateVecEmitter<'a> {
    /// Constructs a new `IntermediateVecEmitter` with a mutable reference to a given `Vec`.
    ///
    /// # Arguments
    ///
    /// * `sink` - A mutable reference to the `Vec` to receive the emitted values.
    pub fn new(sink: &'a mut Vec<KeyValue>) -> Self {
        IntermediateVecEmitter { sink: sink }
    }
}

impl<'a> EmitIntermediate for IntermediateVecEmitter<'a> {
    fn emit(&mut self, key: String, value: String) -> Result<()> {
        self.sink.push(KeyValue::new(key, value));
        Ok(())
    }
}
