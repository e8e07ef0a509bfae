//! Actor hierarchies (.ACT).
//!
//! Actors group independently authored meshes into one body. The chunk stream is loosely
//! ordered: an actor name chunk opens an actor, and the chunks after it fill in that actor
//! until the next actor name or the terminator.

use byteorder::ReadBytesExt;

use std::collections::HashMap;

use tracing::{
	debug,
	warn
};

use ultraviolet::{
	mat::Mat3,
	vec::Vec3
};

use roadkill_core::{
	chunk::{
		ChunkHeader,
		ChunkType,
		read_name
	},
	DecodeError,
	io_ext::ReadBinExt
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
	/// Scale/rotation block, columns in file order
	pub matrix: Mat3,
	/// -X is to the left, -Z is to the front
	pub translation: Vec3,
}

impl Transform {
	#[cfg(feature = "import")]
	fn read<R>(buf: &mut R) -> Result<Transform, DecodeError>
	where
		R: ReadBytesExt,
	{
		let c0 = buf.read_vec3_be()?;
		let c1 = buf.read_vec3_be()?;
		let c2 = buf.read_vec3_be()?;

		Ok(Transform {
			matrix: Mat3::new(c0, c1, c2),
			translation: buf.read_vec3_be()?,
		})
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Actor {
	pub visible: u8,
	pub what2: u8,
	pub name: String,
	pub material_name: String,
	pub mesh_name: String,
	/// `None` if the actor carried no transform chunk
	pub transform: Option<Transform>,
}

impl Actor {
	pub fn new(visible: u8, what2: u8, name: String) -> Actor {
		Actor {
			visible: visible,
			what2: what2,
			name: name,
			..Actor::default()
		}
	}

	pub fn is_visible(&self) -> bool {
		self.visible != 0
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
	pub parts: HashMap<String, Actor>,
}

impl Model {
	#[cfg(feature = "import")]
	pub fn read<R>(buf: &mut R) -> Result<Model, DecodeError>
	where
		R: ReadBytesExt,
	{
		let mut model = Model::default();
		// the actor currently being filled in, if any
		let mut open: Option<Actor> = None;

		loop {
			let header = ChunkHeader::read(buf)?;

			match header.kind() {
				Some(ChunkType::ActorName) => {
					if let Some(actor) = open.take() {
						model.commit(actor);
					}

					let visible = buf.read_u8()?;
					let what2 = buf.read_u8()?;
					let name = read_name(buf)?;
					debug!("Reading actor {}", name);

					open = Some(Actor::new(visible, what2, name));
				},
				Some(ChunkType::ActorTransform) => {
					let actor = open.as_mut().ok_or(DecodeError::NoOpenActor(header.ty))?;
					actor.transform = Some(Transform::read(buf)?);
				},
				Some(ChunkType::MaterialRef) => {
					let actor = open.as_mut().ok_or(DecodeError::NoOpenActor(header.ty))?;
					actor.material_name = read_name(buf)?;
				},
				Some(ChunkType::MeshFileRef) => {
					let actor = open.as_mut().ok_or(DecodeError::NoOpenActor(header.ty))?;
					actor.mesh_name = read_name(buf)?;
				},
				Some(ChunkType::Unknown25) | Some(ChunkType::Unknown2A) => {
					if header.size != 0 {
						return Err(DecodeError::MarkerPayload {
							ty: header.ty,
							size: header.size,
						});
					}
					warn!("Skipping marker chunk {:#x}", header.ty);
				},
				Some(ChunkType::Null) => {
					if let Some(actor) = open.take() {
						model.commit(actor);
					}

					if header.size != 0 {
						return Err(DecodeError::Terminator {
							ty: header.ty,
							size: header.size,
						});
					}

					break;
				},
				_ => return Err(DecodeError::UnrecognizedChunk(header.ty)),
			}
		}

		Ok(model)
	}

	/// Stores an actor under its name, replacing any earlier actor of that name
	fn commit(&mut self, actor: Actor) {
		if self.parts.contains_key(&actor.name) {
			warn!("Actor {} redefined", actor.name);
		}

		self.parts.insert(actor.name.clone(), actor);
	}

	pub fn get(&self, name: &str) -> Option<&Actor> {
		self.parts.get(&name.to_ascii_uppercase())
	}
}
