//! # dkg-address
//!
//! Derives an Ethereum account address from the group public key produced
//! by a threshold-ECDSA distributed key generation (DKG) run, and extracts
//! that key from the loosely structured text/HTML the participating
//! parties emit.
//!
//! Pipeline:
//!
//! ```text
//! raw party output → extract_coordinates → (x, y) hex
//!                  → derive_address      → 0x… address
//! ```
//!
//! The two halves are independent: extraction returns hex verbatim, and
//! derivation owns all validation and normalization.
//!
//! # Example
//!
//! ```
//! use dkg_address::{derive_address, extract_coordinates};
//!
//! let status = "DKG done. Public Key: Point(x: \
//!     79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798, y: \
//!     483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8)";
//!
//! let (x, y) = extract_coordinates(status).unwrap();
//! let addr = derive_address(&x, &y).unwrap();
//! assert_eq!(addr.hex_lower, "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf");
//! ```

pub mod derive;
pub mod extract;

pub use derive::{
    address_from_uncompressed, derive_address, to_eip55, DeriveError, EthereumAddress,
};
pub use extract::{extract_coordinates, extract_dkg_fields, DkgFields, ExtractError};
