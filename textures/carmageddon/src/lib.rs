pub mod pix;

#[cfg(feature = "import")]
use std::{
	io::BufRead,
	path::Path
};

#[cfg(feature = "import")]
use roadkill_core::{
	chunk::FileType,
	DecodeError,
	ImportCfg,
	resource::{
		open,
		read_records
	}
};

pub use pix::{
	Pixelmap,
	Texels
};

/// Reads every pixelmap of a .PIX file
#[cfg(feature = "import")]
pub fn read_pixelmaps<R>(buf: &mut R, cfg: &ImportCfg) -> Result<Vec<Pixelmap>, DecodeError>
where
	R: BufRead,
{
	read_records(FileType::Pixelmap, cfg, buf, |buf| Pixelmap::read_with(buf, cfg))
}

#[cfg(feature = "import")]
pub fn read_pixelmaps_from<P>(path: P, cfg: &ImportCfg) -> Result<Vec<Pixelmap>, DecodeError>
where
	P: AsRef<Path>,
{
	read_pixelmaps(&mut open(path)?, cfg)
}
