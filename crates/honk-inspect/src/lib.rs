//! Report building for UltraHonk artifact inspection
//!
//! Turns decoded verification keys, proofs and public inputs into
//! serializable reports that the `honk-inspect` CLI renders as text or JSON.
//!
//! # Example
//!
//! ```ignore
//! use honk_core::VerificationKey;
//! use honk_inspect::VkReport;
//!
//! let vk = VerificationKey::from_bytes(&vk_bytes)?;
//! let report = VkReport::new(&vk);
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```

pub mod report;

pub use report::*;
