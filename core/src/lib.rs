pub mod cfg;
pub mod chunk;
pub mod error;
pub mod io_ext;
pub mod resource;

pub use cfg::{
	ImportCfg,
	ImportFlag
};

pub use error::{
	DecodeError,
	ErrorKind
};
