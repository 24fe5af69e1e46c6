pub mod map;
pub mod merged;
pub mod source;
pub mod value;

pub use map::ConfigMap;
pub use merged::MergedConfig;
pub use source::PropertySource;
pub use value::ConfigValue;
