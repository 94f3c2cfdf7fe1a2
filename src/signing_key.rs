use {
    crate::{
        constants::{AWS4_PREFIX, ISO8601_DATE_FORMAT, SHA256_OUTPUT_LEN},
        crypto::hmac_sha256,
    },
    chrono::NaiveDate,
    std::fmt::{Debug, Display, Formatter, Result as FmtResult},
};

/// A raw storage secret key (`kSecret`).
#[derive(Clone, PartialEq, Eq)]
pub struct KSecretKey {
    /// The secret key, prefixed with "AWS4".
    prefixed_key: Vec<u8>,
}

/// The `kDate` key: `HMAC_SHA256("AWS4" + KSecretKey, "YYYYMMDD")`
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KDateKey {
    /// The raw key.
    key: [u8; SHA256_OUTPUT_LEN],
}

/// The `kRegion` key: a `kDate` key, HMAC-SHA256 hashed with the region.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KRegionKey {
    /// The raw key.
    key: [u8; SHA256_OUTPUT_LEN],
}

/// The `kService` key: a `kRegion` key, HMAC-SHA256 hashed with the service.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KServiceKey {
    /// The raw key.
    key: [u8; SHA256_OUTPUT_LEN],
}

/// The `kSigning` key: a `kService` key, HMAC-SHA256 hashed with the scope terminator.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KSigningKey {
    /// The resulting raw signing key.
    key: [u8; SHA256_OUTPUT_LEN],
}

impl AsRef<[u8]> for KSecretKey {
    fn as_ref(&self) -> &[u8] {
        // Remove the "AWS4" prefix.
        &self.prefixed_key[AWS4_PREFIX.len()..]
    }
}

impl AsRef<[u8; SHA256_OUTPUT_LEN]> for KDateKey {
    fn as_ref(&self) -> &[u8; SHA256_OUTPUT_LEN] {
        &self.key
    }
}

impl AsRef<[u8; SHA256_OUTPUT_LEN]> for KRegionKey {
    fn as_ref(&self) -> &[u8; SHA256_OUTPUT_LEN] {
        &self.key
    }
}

impl AsRef<[u8; SHA256_OUTPUT_LEN]> for KServiceKey {
    fn as_ref(&self) -> &[u8; SHA256_OUTPUT_LEN] {
        &self.key
    }
}

impl AsRef<[u8; SHA256_OUTPUT_LEN]> for KSigningKey {
    fn as_ref(&self) -> &[u8; SHA256_OUTPUT_LEN] {
        &self.key
    }
}

macro_rules! opaque_fmt {
    ($($key:ident),*) => {
        $(
            impl Debug for $key {
                fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                    f.write_str(stringify!($key))
                }
            }

            impl Display for $key {
                fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                    f.write_str(stringify!($key))
                }
            }
        )*
    };
}

opaque_fmt!(KSecretKey, KDateKey, KRegionKey, KServiceKey, KSigningKey);

/// HMAC-SHA256 `key` with `value`, yielding the next key in the chain.
#[inline(always)]
fn derive(key: &[u8], value: &str) -> [u8; SHA256_OUTPUT_LEN] {
    hmac_sha256(key, value.as_bytes())
}

impl KSecretKey {
    /// Create a new `KSecretKey` from a raw secret key.
    pub fn new(raw: &str) -> Self {
        let mut prefixed_key = Vec::with_capacity(AWS4_PREFIX.len() + raw.len());
        prefixed_key.extend_from_slice(AWS4_PREFIX.as_bytes());
        prefixed_key.extend_from_slice(raw.as_bytes());
        Self {
            prefixed_key,
        }
    }

    /// Create a new `KDateKey` from this `KSecretKey` and a date.
    pub fn to_kdate(&self, date: NaiveDate) -> KDateKey {
        let date = date.format(ISO8601_DATE_FORMAT).to_string();
        KDateKey {
            key: derive(&self.prefixed_key, &date),
        }
    }

    /// Create a new `KSigningKey` from this `KSecretKey`, a date, a region, a service, and a scope terminator.
    pub fn to_ksigning(&self, date: NaiveDate, region: &str, service: &str, terminator: &str) -> KSigningKey {
        self.to_kdate(date).to_kregion(region).to_kservice(service).to_ksigning(terminator)
    }
}

impl KDateKey {
    /// Create a new `KRegionKey` from this `KDateKey` and a region.
    pub fn to_kregion(&self, region: &str) -> KRegionKey {
        KRegionKey {
            key: derive(&self.key, region),
        }
    }
}

impl KRegionKey {
    /// Create a new `KServiceKey` from this `KRegionKey` and a service.
    pub fn to_kservice(&self, service: &str) -> KServiceKey {
        KServiceKey {
            key: derive(&self.key, service),
        }
    }
}

impl KServiceKey {
    /// Create a new `KSigningKey` from this `KServiceKey` and the scope terminator (normally `aws4_request`).
    pub fn to_ksigning(&self, terminator: &str) -> KSigningKey {
        KSigningKey {
            key: derive(&self.key, terminator),
        }
    }
}

impl KSigningKey {
    /// Sign `string_to_sign` with this key.
    pub fn sign(&self, string_to_sign: &[u8]) -> [u8; SHA256_OUTPUT_LEN] {
        hmac_sha256(&self.key, string_to_sign)
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{crypto::hmac_sha256, KSecretKey},
        chrono::NaiveDate,
    };

    const SECRET: &str = "0NAsbOAZHGQLt/HMeEC8ZmNYIEMQSdEPiLzM7/gC";

    #[test_log::test]
    fn test_signing_key_derived() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let ksecret1a = KSecretKey::new(SECRET);
        let ksecret1b = KSecretKey::new(SECRET);
        let ksecret2 = KSecretKey::new("0NAsbOAZHGQLt/HMeEC8ZmNYIEMQSdEPiLzM7/gD");

        assert_eq!(ksecret1a, ksecret1b);
        assert_eq!(ksecret1a, ksecret1a.clone());
        assert_ne!(ksecret1a, ksecret2);
        assert_eq!(format!("{:?}", ksecret1a).as_str(), "KSecretKey");
        assert_eq!(format!("{}", ksecret1a).as_str(), "KSecretKey");
        assert_eq!(ksecret1a.as_ref(), SECRET.as_bytes());

        let kdate = ksecret1a.to_kdate(date);
        assert_ne!(kdate, ksecret2.to_kdate(date));
        assert_eq!(hex::encode(kdate.as_ref()), "78f5036f4858347596f160399b3498ce14e6216acfd9cca35c6b09c82d692329");
        assert_eq!(format!("{:?}", kdate).as_str(), "KDateKey");

        let kregion = kdate.to_kregion("ap-northeast-1");
        assert_eq!(hex::encode(kregion.as_ref()), "9d8f8629d446f82be9fb8f6ff10c4f3567f40d28b2f74a0a7b08296beb29bec6");
        assert_eq!(format!("{}", kregion).as_str(), "KRegionKey");

        let kservice = kregion.to_kservice("s3");
        assert_eq!(hex::encode(kservice.as_ref()), "ea7fa376526a084b1837d2892a07da50038df8cb2380c78cf09cffa94a20aa13");
        assert_eq!(format!("{:?}", kservice).as_str(), "KServiceKey");

        let ksigning = kservice.to_ksigning("aws4_request");
        assert_eq!(hex::encode(ksigning.as_ref()), "41d82005d63b7039f9f5e9273d9dbe8f21bb58765dc34e4e1b66180aeba52ad2");
        assert_eq!(format!("{}", ksigning).as_str(), "KSigningKey");

        assert_eq!(ksecret1a.to_ksigning(date, "ap-northeast-1", "s3", "aws4_request"), ksigning);
    }

    #[test_log::test]
    fn test_chain_order() {
        // Each link is a plain HMAC-SHA256 of the previous key, applied date, region, service, terminator.
        let date = NaiveDate::from_ymd_opt(2015, 8, 30).unwrap();
        let k1 = hmac_sha256(b"AWS4secret", b"20150830");
        let k2 = hmac_sha256(&k1, b"us-east-1");
        let k3 = hmac_sha256(&k2, b"example");
        let k4 = hmac_sha256(&k3, b"aws4_request");

        let ksigning = KSecretKey::new("secret").to_ksigning(date, "us-east-1", "example", "aws4_request");
        assert_eq!(ksigning.as_ref(), &k4);

        // Swapping region and service yields a different key.
        let swapped = KSecretKey::new("secret").to_ksigning(date, "example", "us-east-1", "aws4_request");
        assert_ne!(swapped, ksigning);

        assert_eq!(ksigning.sign(b"payload"), hmac_sha256(&k4, b"payload"));
    }
}
