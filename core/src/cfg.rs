use bitflags::bitflags;

use crate::error::DecodeError;

bitflags! {
	pub struct ImportFlag: u32 {
		/// Reject files whose header subtype does not match the requested resource kind
		const STRICT_FILE_TYPE = 1;
	}
}

impl Default for ImportFlag {
	fn default() -> Self {
		ImportFlag::empty()
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImportCfg {
	pub flags: ImportFlag,
	/// Largest pixelmap payload accepted, in bytes
	pub max_payload: Option<usize>,
}

impl ImportCfg {
	pub fn strict() -> Self {
		Self {
			flags: ImportFlag::STRICT_FILE_TYPE,
			..Self::default()
		}
	}

	/// Checks a payload length against the configured limit
	pub fn check_payload(&self, len: u64) -> Result<usize, DecodeError> {
		let len_usize = usize::try_from(len).map_err(|_| DecodeError::Allocation(len))?;

		match self.max_payload {
			Some(max) if len_usize > max => Err(DecodeError::Allocation(len)),
			_ => Ok(len_usize),
		}
	}
}
