//! Fresh secrets for generated configuration
//!
//! Every interpolation point that needs a secret gets its own value; secrets
//! are never shared between files even when they back the same setting.

/// Source of hex-encoded 32-byte secrets.
///
/// Plan resolution takes this as a parameter so tests can supply a
/// deterministic stream and assert on the resulting directives byte for byte.
pub trait SecretSource {
    /// 32 random bytes, hex-encoded (64 characters). A new value per call.
    fn hex_secret(&mut self) -> String;
}

/// Production source backed by the operating system RNG.
#[derive(Debug, Default)]
pub struct OsSecretSource;

impl SecretSource for OsSecretSource {
    fn hex_secret(&mut self) -> String {
        let mut buf = [0u8; 32];
        // The OS RNG is unavailable only on broken platforms; there is no
        // fallback worth generating weak secrets with.
        getrandom::getrandom(&mut buf).expect("operating system RNG unavailable");
        buf.iter().map(|b| format!("{b:02x}")).collect()
    }
}

/// Deterministic source for tests: 1, 2, 3... zero-padded to 64 hex chars.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct StubSecretSource {
    counter: u64,
}

#[cfg(test)]
impl SecretSource for StubSecretSource {
    fn hex_secret(&mut self) -> String {
        self.counter += 1;
        format!("{:064x}", self.counter)
    }
}
