pub(crate) mod apply;
pub(crate) mod fingerprint;
