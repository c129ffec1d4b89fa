#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use vc_codec as codec;

pub use vc_codec::derive::Tabular;
pub use vc_codec::{
    DecodeError, DecodeWarning, Decoder, EncodeError, Encoder, EncoderConfig, Reflect, decode,
    encode, try_decode, try_encode,
};
