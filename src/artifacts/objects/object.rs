use crate::artifacts::core::ObjectError;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::record::Record;

/// Capability set shared by the two object kinds.
///
/// An object knows its kind, the name its parent will record it under, and
/// its content digest. Everything else (record lines, storage paths) derives
/// from those three.
pub trait Object {
    fn kind(&self) -> ObjectType;

    /// Base name used in the parent tree's record. Never part of this
    /// object's own identity.
    fn name(&self) -> &str;

    /// The immutable content identity.
    ///
    /// Fails with `NotReady` when called on a tree before its children are
    /// constructed; construction is eager, so callers that respect the
    /// children-before-parent order never see this.
    fn digest(&self) -> Result<&ObjectId, ObjectError>;

    /// The line a parent tree writes to represent this object.
    fn record(&self) -> Result<Record, ObjectError> {
        Ok(Record::new(
            self.kind(),
            self.digest()?.clone(),
            self.name().to_string(),
        ))
    }
}
