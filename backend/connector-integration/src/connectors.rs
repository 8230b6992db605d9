pub mod macros;
pub mod worldnet;

pub use self::worldnet::Worldnet;
