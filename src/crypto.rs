//! Hashing and HMAC primitives shared by both signing protocols.

use {
    crate::{constants::SHA256_OUTPUT_LEN, EventDataError},
    hmac::{
        digest::{core_api::BlockSizeUser, Digest},
        Mac, SimpleHmac,
    },
    md5::Md5,
    sha1::Sha1,
    sha2::Sha256,
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// The hash algorithms the event data services use.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HashAlgorithm {
    /// MD5 (16-byte digest).
    Md5 = 0,

    /// SHA-1 (20-byte digest).
    Sha1 = 1,

    /// SHA-256 (32-byte digest).
    Sha256 = 2,
}

/// The functions backing a [`HashAlgorithm`].
struct AlgorithmFns {
    name: &'static str,
    output_len: usize,
    digest: fn(&[u8]) -> Vec<u8>,
    hmac: fn(&[u8], &[u8]) -> Vec<u8>,
}

/// Indexed by the `HashAlgorithm` discriminant.
static ALGORITHMS: [AlgorithmFns; 3] = [
    AlgorithmFns {
        name: "MD5",
        output_len: 16,
        digest: digest_with::<Md5>,
        hmac: hmac_with::<Md5>,
    },
    AlgorithmFns {
        name: "SHA1",
        output_len: 20,
        digest: digest_with::<Sha1>,
        hmac: hmac_with::<Sha1>,
    },
    AlgorithmFns {
        name: "SHA256",
        output_len: 32,
        digest: digest_with::<Sha256>,
        hmac: hmac_with::<Sha256>,
    },
];

fn digest_with<D: Digest>(data: &[u8]) -> Vec<u8> {
    D::digest(data).to_vec()
}

fn hmac_with<D: Digest + BlockSizeUser>(key: &[u8], message: &[u8]) -> Vec<u8> {
    let mut mac = <SimpleHmac<D> as Mac>::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

impl HashAlgorithm {
    /// All supported algorithms.
    pub const ALL: [HashAlgorithm; 3] = [HashAlgorithm::Md5, HashAlgorithm::Sha1, HashAlgorithm::Sha256];

    #[inline(always)]
    fn fns(self) -> &'static AlgorithmFns {
        &ALGORITHMS[self as usize]
    }

    /// The canonical upper-case name of the algorithm, e.g. `SHA256`.
    pub fn name(self) -> &'static str {
        self.fns().name
    }

    /// The length of the digest in bytes.
    pub fn output_len(self) -> usize {
        self.fns().output_len
    }
}

impl Display for HashAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = EventDataError;

    /// Parse an algorithm name. Dashes are ignored and case does not matter, so `sha-256` and
    /// `SHA256` are equivalent.
    fn from_str(s: &str) -> Result<Self, EventDataError> {
        let normalized = s.replace('-', "").to_ascii_uppercase();
        HashAlgorithm::ALL
            .into_iter()
            .find(|alg| alg.name() == normalized)
            .ok_or_else(|| EventDataError::UnsupportedAlgorithm(s.to_string()))
    }
}

/// Compute the digest of `data`.
///
/// If `length` is given, only the first `length` bytes of the digest are returned. A `length`
/// longer than the digest returns the full digest.
pub fn hash(algorithm: HashAlgorithm, data: &[u8], length: Option<usize>) -> Vec<u8> {
    let mut digest = (algorithm.fns().digest)(data);
    if let Some(length) = length {
        digest.truncate(length);
    }
    digest
}

/// Compute the HMAC of `message` keyed with `key`.
pub fn hmac(key: &[u8], algorithm: HashAlgorithm, message: &[u8]) -> Vec<u8> {
    (algorithm.fns().hmac)(key, message)
}

/// HMAC-SHA256 into a fixed-size array.
#[inline(always)]
pub(crate) fn hmac_sha256(key: &[u8], value: &[u8]) -> [u8; SHA256_OUTPUT_LEN] {
    let mut mac = <SimpleHmac<Sha256> as Mac>::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(value);
    let mut result = [0; SHA256_OUTPUT_LEN];
    result.copy_from_slice(mac.finalize().into_bytes().as_slice());
    result
}

#[inline(always)]
pub(crate) fn sha256_hex(value: &[u8]) -> String {
    hex::encode(Sha256::digest(value))
}
