pub(crate) mod binding;
pub(crate) mod events;
pub(crate) mod motion;
pub(crate) mod sink;
pub(crate) mod trigger;
