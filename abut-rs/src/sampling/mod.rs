mod path_sampler;

#[doc(inline)]
pub use path_sampler::SamplerConfig;
#[doc(inline)]
pub use path_sampler::sample_path;
