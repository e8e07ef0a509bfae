use byteorder::{
	BE,
	WriteBytesExt
};

use roadkill_core::{
	chunk::ChunkType,
	ErrorKind
};

/// Builds big endian chunk streams for decoder tests
#[derive(Default)]
pub struct Bytes(Vec<u8>);

impl Bytes {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn u8(mut self, v: u8) -> Self {
		self.0.push(v);
		self
	}

	pub fn i16(mut self, v: i16) -> Self {
		self.0.write_i16::<BE>(v).unwrap();
		self
	}

	pub fn u32(mut self, v: u32) -> Self {
		self.0.write_u32::<BE>(v).unwrap();
		self
	}

	pub fn f32(mut self, v: f32) -> Self {
		self.0.write_f32::<BE>(v).unwrap();
		self
	}

	pub fn cstr(mut self, s: &str) -> Self {
		self.0.extend_from_slice(s.as_bytes());
		self.0.push(0);
		self
	}

	pub fn chunk(self, ty: ChunkType, size: u32) -> Self {
		self.u32(ty as u32).u32(size)
	}

	pub fn ext_chunk(mut self, ty: ChunkType, size: u32, entries: u32) -> Self {
		self = self.chunk(ty, size);
		if ty == ChunkType::FileName {
			self.0.write_u16::<BE>(entries as u16).unwrap();
			self
		} else {
			self.u32(entries)
		}
	}

	pub fn null(self) -> Self {
		self.u32(0).u32(0)
	}

	pub fn file_header(self, file_type: u32) -> Self {
		self.chunk(ChunkType::FileHeader, 8).u32(file_type).u32(0)
	}

	pub fn append(mut self, other: &[u8]) -> Self {
		self.0.extend_from_slice(other);
		self
	}

	pub fn build(self) -> Vec<u8> {
		self.0
	}
}

/// Decodes every strict prefix of a valid record and checks the failure kind
pub fn assert_prefixes_fail<T, F>(data: &[u8], mut decode: F)
where
	F: FnMut(&mut &[u8]) -> Result<T, roadkill_core::DecodeError>,
{
	for len in 0..data.len() {
		let mut prefix = &data[..len];
		match decode(&mut prefix) {
			Ok(_) => panic!("prefix of {} bytes decoded", len),
			Err(e) => assert!(
				matches!(e.kind(), ErrorKind::TruncatedStream | ErrorKind::FormatViolation),
				"prefix of {} bytes: {:?}", len, e),
		}
	}
}
