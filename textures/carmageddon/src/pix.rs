//! Pixelmaps (.PIX).
//!
//! A pixelmap is a header chunk (dimensions and name) and a data chunk holding the raw texels.
//! The texel format is left to the caller.

use byteorder::{
	BE,
	ReadBytesExt
};

use std::io::Read;

use tracing::debug;

use roadkill_core::{
	chunk::{
		ChunkHeader,
		ChunkType,
		read_name
	},
	DecodeError,
	ImportCfg
};

/// Raw texel payload, owned by exactly one pixelmap
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Texels(Vec<u8>);

impl Texels {
	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn into_inner(self) -> Vec<u8> {
		self.0
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pixelmap {
	pub name: String,
	/// Stored width and height
	pub w: u16,
	pub h: u16,
	/// How much of the stored area holds useful data
	pub use_w: u16,
	pub use_h: u16,
	pub what1: u8,
	pub what2: u16,
	pub units: u32,
	pub unit_bytes: u32,
	pub data: Texels,
}

impl Pixelmap {
	#[cfg(feature = "import")]
	pub fn read<R>(buf: &mut R) -> Result<Pixelmap, DecodeError>
	where
		R: ReadBytesExt,
	{
		Pixelmap::read_with(buf, &ImportCfg::default())
	}

	#[cfg(feature = "import")]
	pub fn read_with<R>(buf: &mut R, cfg: &ImportCfg) -> Result<Pixelmap, DecodeError>
	where
		R: ReadBytesExt,
	{
		ChunkHeader::read(buf)?.expect(ChunkType::PixelmapHeader)?;

		let what1 = buf.read_u8()?;
		let w = buf.read_u16::<BE>()?;
		let use_w = buf.read_u16::<BE>()?;
		let h = buf.read_u16::<BE>()?;
		let use_h = buf.read_u16::<BE>()?;
		let what2 = buf.read_u16::<BE>()?;
		let name = read_name(buf)?;
		debug!("Reading pixelmap {} ({}x{})", name, w, h);

		ChunkHeader::read(buf)?.expect(ChunkType::PixelmapData)?;

		let units = buf.read_u32::<BE>()?;
		let unit_bytes = buf.read_u32::<BE>()?;
		let data = read_payload(buf, units as u64 * unit_bytes as u64, cfg)?;

		ChunkHeader::read_terminator(buf)?;

		Ok(Pixelmap {
			name: name,
			w: w,
			h: h,
			use_w: use_w,
			use_h: use_h,
			what1: what1,
			what2: what2,
			units: units,
			unit_bytes: unit_bytes,
			data: data,
		})
	}

	/// Payload length declared by the data chunk
	pub fn payload_len(&self) -> u64 {
		self.units as u64 * self.unit_bytes as u64
	}
}

#[cfg(feature = "import")]
fn read_payload<R>(buf: &mut R, len: u64, cfg: &ImportCfg) -> Result<Texels, DecodeError>
where
	R: Read,
{
	let size = cfg.check_payload(len)?;

	let mut data = Vec::new();
	data.try_reserve_exact(size).map_err(|_| DecodeError::Allocation(len))?;

	buf.by_ref().take(len).read_to_end(&mut data)?;
	if data.len() < size {
		return Err(DecodeError::Truncated);
	}

	Ok(Texels(data))
}
