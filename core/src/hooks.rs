use crate::{Parsable, SerializationWriter};
use std::sync::Arc;

/// A callback which receives a model before or after it is written.
pub type ParsableHook = Arc<dyn Fn(&dyn Parsable) + Send + Sync>;

/// A callback which receives a model, along with the writer it is being written to, right after
/// writing of the model starts.
pub type StartObjectHook = Arc<dyn Fn(&dyn Parsable, &mut dyn SerializationWriter) + Send + Sync>;

/// Storage for the three lifecycle callbacks of a [`SerializationWriter`].
///
/// This is pure storage. Whatever walks a model's object graph is responsible for calling the
/// hooks; writers which never open nested objects simply hold on to them.
#[derive(Clone, Default)]
pub struct ObjectHooks {
    /// Called before a model is written.
    pub before: Option<ParsableHook>,

    /// Called after a model is written.
    pub after: Option<ParsableHook>,

    /// Called right after writing of a model starts.
    pub start: Option<StartObjectHook>,
}

impl std::fmt::Debug for ObjectHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectHooks")
            .field("before", &self.before.is_some())
            .field("after", &self.after.is_some())
            .field("start", &self.start.is_some())
            .finish()
    }
}
