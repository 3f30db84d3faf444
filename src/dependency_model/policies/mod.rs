mod resolution_policy;

pub use resolution_policy::ResolutionPolicy;
