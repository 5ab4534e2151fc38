pub const GLSLANG_VALIDATOR : &str = "glslangValidator";

/// Emit SPIR-V for Vulkan.
pub const VULKAN_FLAG : &str = "-V";
pub const OUTPUT_FLAG : &str = "-o";
pub const SPV_SUFFIX : &str = ".spv";

/// Sources of the shadowmap sample, compiled in this order.
pub const SHADOWMAP_SHADERS : &[&str] = &[
	"simple.vert",
	"quad.vert",
	"quad.frag",
	"bbox.vert",
	"bbox_inst.vert",
	"bbox.frag",
	"simple_shadow.frag",
];
