pub mod act;
pub mod dat;
pub mod mat;

#[cfg(test)]
mod test_util;

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

pub use act::{
	Actor,
	Model,
	Transform
};

pub use dat::{
	Face,
	Mesh
};

pub use mat::{
	Material,
	MaterialLibrary,
	material_library
};

/// Reads every mesh of a .DAT file
#[cfg(feature = "import")]
pub fn read_meshes<R>(buf: &mut R, cfg: &ImportCfg) -> Result<Vec<Mesh>, DecodeError>
where
	R: BufRead,
{
	read_records(FileType::Mesh, cfg, buf, |buf| Mesh::read(buf))
}

#[cfg(feature = "import")]
pub fn read_meshes_from<P>(path: P, cfg: &ImportCfg) -> Result<Vec<Mesh>, DecodeError>
where
	P: AsRef<Path>,
{
	read_meshes(&mut open(path)?, cfg)
}

/// Reads every material of a .MAT file
#[cfg(feature = "import")]
pub fn read_materials<R>(buf: &mut R, cfg: &ImportCfg) -> Result<Vec<Material>, DecodeError>
where
	R: BufRead,
{
	read_records(FileType::Material, cfg, buf, |buf| Material::read(buf))
}

#[cfg(feature = "import")]
pub fn read_materials_from<P>(path: P, cfg: &ImportCfg) -> Result<Vec<Material>, DecodeError>
where
	P: AsRef<Path>,
{
	read_materials(&mut open(path)?, cfg)
}

/// Reads every model of an .ACT file
#[cfg(feature = "import")]
pub fn read_models<R>(buf: &mut R, cfg: &ImportCfg) -> Result<Vec<Model>, DecodeError>
where
	R: BufRead,
{
	read_records(FileType::Actor, cfg, buf, |buf| Model::read(buf))
}

#[cfg(feature = "import")]
pub fn read_models_from<P>(path: P, cfg: &ImportCfg) -> Result<Vec<Model>, DecodeError>
where
	P: AsRef<Path>,
{
	read_models(&mut open(path)?, cfg)
}
