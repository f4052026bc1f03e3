// wallet-core/src/crypto/mnemonic.rs
//
// Mnemonic Module - BIP-39 phrases for Cosmos accounts
// Standards: BIP-39 (Mnemonic), PBKDF2-HMAC-SHA512 (Seed Derivation)

use crate::error::{MnemonicError, WalletError, WalletResult};
use bip39::{Language, Mnemonic};
use rand::{rngs::OsRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Supported entropy strengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    Twelve = 12,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    /// Map an entropy strength in bits to a word count.
    pub fn from_strength(bits: usize) -> WalletResult<Self> {
        match bits {
            128 => Ok(WordCount::Twelve),
            256 => Ok(WordCount::TwentyFour),
            other => Err(MnemonicError::InvalidStrength(other).into()),
        }
    }

    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::TwentyFour => 32,
        }
    }

    #[inline]
    pub const fn strength_bits(self) -> usize {
        self.entropy_bytes() * 8
    }
}

/// A validated BIP-39 mnemonic phrase.
///
/// The phrase is zeroized when the value is dropped and never shows up in
/// `Debug` output.
#[derive(Clone, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
    word_count: usize,
}

impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &self.word_count)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl WalletMnemonic {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// New 12-word mnemonic (128-bit entropy)
    pub fn new() -> WalletResult<Self> {
        Self::with_word_count(WordCount::Twelve)
    }

    /// New 24-word mnemonic (256-bit entropy)
    pub fn new_24_words() -> WalletResult<Self> {
        Self::with_word_count(WordCount::TwentyFour)
    }

    /// Generate a mnemonic from an entropy strength given in bits.
    ///
    /// Only 128 (12 words) and 256 (24 words) are accepted.
    pub fn generate(strength: usize) -> WalletResult<Self> {
        Self::with_word_count(WordCount::from_strength(strength)?)
    }

    pub fn with_word_count(word_count: WordCount) -> WalletResult<Self> {
        Self::from_entropy_with(word_count, |buf| OsRng.fill_bytes(buf))
    }

    fn from_entropy_with(
        word_count: WordCount,
        fill: impl FnOnce(&mut [u8]),
    ) -> WalletResult<Self> {
        let entropy_size = word_count.entropy_bytes();

        let mut entropy = [0u8; 32];
        fill(&mut entropy[..entropy_size]);

        let mnemonic = Mnemonic::from_entropy(&entropy[..entropy_size])
            .map_err(|e| WalletError::Mnemonic(MnemonicError::Bip39Error(e.to_string())));

        entropy.zeroize();

        let mnemonic = mnemonic?;
        Ok(Self {
            phrase: mnemonic.to_string(),
            word_count: word_count as usize,
        })
    }

    /// Restore a mnemonic from an existing phrase.
    ///
    /// Checks the word count, that every word is in the English wordlist and
    /// the embedded checksum.
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        let normalized_phrase = Self::normalize(phrase)?;
        Mnemonic::parse_in_normalized(Language::English, &normalized_phrase)
            .map_err(|e| map_bip39_error(e, &normalized_phrase))?;
        Ok(Self::from_normalized(normalized_phrase))
    }

    /// Restore a mnemonic without verifying its checksum.
    ///
    /// Words must still come from the English wordlist.
    pub fn from_phrase_unchecked(phrase: &str) -> WalletResult<Self> {
        let normalized_phrase = Self::normalize(phrase)?;
        Mnemonic::parse_in_normalized_without_checksum_check(
            Language::English,
            &normalized_phrase,
        )
        .map_err(|e| map_bip39_error(e, &normalized_phrase))?;
        Ok(Self::from_normalized(normalized_phrase))
    }

    fn normalize(phrase: &str) -> WalletResult<String> {
        let words = phrase.split_whitespace().collect::<Vec<_>>();
        if !matches!(words.len(), 12 | 24) {
            return Err(MnemonicError::InvalidWordCount(words.len()).into());
        }
        Ok(words.join(" ").to_lowercase())
    }

    fn from_normalized(phrase: String) -> Self {
        let word_count = phrase.split(' ').count();
        Self { phrase, word_count }
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// The mnemonic phrase. Do not log it.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn words(&self) -> Vec<&str> {
        self.phrase.split_whitespace().collect()
    }

    pub fn strength_bits(&self) -> usize {
        match self.word_count {
            12 => WordCount::Twelve.strength_bits(),
            24 => WordCount::TwentyFour.strength_bits(),
            _ => 0,
        }
    }

    // =========================================================================
    // SEED DERIVATION
    // =========================================================================

    /// BIP-39 seed (PBKDF2-HMAC-SHA512, 2048 rounds).
    ///
    /// Same phrase and passphrase always give the same 64 bytes.
    pub fn to_seed(&self, passphrase: Option<&str>) -> WalletResult<Zeroizing<[u8; 64]>> {
        // Seed derivation does not depend on the checksum, so phrases restored
        // through `from_phrase_unchecked` derive the same way.
        let mnemonic = Mnemonic::parse_in_normalized_without_checksum_check(
            Language::English,
            &self.phrase,
        )
        .map_err(|e| map_bip39_error(e, &self.phrase))?;
        Ok(Zeroizing::new(
            mnemonic.to_seed_normalized(passphrase.unwrap_or("")),
        ))
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Full validation: word count, wordlist and checksum.
    pub fn validate(phrase: &str) -> WalletResult<()> {
        Self::from_phrase(phrase).map(|_| ())
    }

    #[inline]
    pub fn is_valid(phrase: &str) -> bool {
        Self::validate(phrase).is_ok()
    }

    pub fn is_valid_word(word: &str) -> bool {
        Language::English.find_word(word).is_some()
    }
}

fn map_bip39_error(e: bip39::Error, phrase: &str) -> WalletError {
    let err = match e {
        bip39::Error::BadWordCount(count) => MnemonicError::InvalidWordCount(count),
        bip39::Error::UnknownWord(index) => MnemonicError::UnknownWord(
            phrase
                .split(' ')
                .nth(index)
                .map(str::to_string)
                .unwrap_or_else(|| format!("#{}", index)),
        ),
        bip39::Error::InvalidChecksum => MnemonicError::ChecksumMismatch,
        other => MnemonicError::Bip39Error(other.to_string()),
    };
    WalletError::Mnemonic(err)
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC_12: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const TEST_MNEMONIC_24: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art";

    #[test]
    fn test_generate_strengths() {
        let m12 = WalletMnemonic::generate(128).unwrap();
        assert_eq!(m12.word_count(), 12);
        assert!(WalletMnemonic::is_valid(m12.phrase()));

        let m24 = WalletMnemonic::generate(256).unwrap();
        assert_eq!(m24.word_count(), 24);
        assert!(WalletMnemonic::is_valid(m24.phrase()));
    }

    #[test]
    fn test_generate_invalid_strength() {
        for bits in [0, 127, 160, 192, 512] {
            assert_eq!(
                WalletMnemonic::generate(bits).unwrap_err(),
                WalletError::Mnemonic(MnemonicError::InvalidStrength(bits))
            );
        }
    }

    #[test]
    fn test_from_phrase_normalizes_whitespace() {
        let messy_phrase =
            "  abandon  abandon   abandon abandon abandon abandon abandon abandon abandon abandon abandon about  ";
        let mnemonic = WalletMnemonic::from_phrase(messy_phrase).unwrap();
        assert_eq!(mnemonic.phrase(), TEST_MNEMONIC_12);
    }

    #[test]
    fn test_altered_word_fails_checksum() {
        let altered = TEST_MNEMONIC_12.replace("about", "abandon");
        assert_eq!(
            WalletMnemonic::validate(&altered).unwrap_err(),
            WalletError::Mnemonic(MnemonicError::ChecksumMismatch)
        );

        let altered = TEST_MNEMONIC_24.replace(" art", " abandon");
        assert_eq!(
            WalletMnemonic::validate(&altered).unwrap_err(),
            WalletError::Mnemonic(MnemonicError::ChecksumMismatch)
        );
    }

    #[test]
    fn test_added_or_removed_word_rejected() {
        let added = format!("{} abandon", TEST_MNEMONIC_12);
        assert!(matches!(
            WalletMnemonic::validate(&added),
            Err(WalletError::Mnemonic(MnemonicError::InvalidWordCount(13)))
        ));

        let removed = TEST_MNEMONIC_12.replacen("abandon ", "", 1);
        assert!(matches!(
            WalletMnemonic::validate(&removed),
            Err(WalletError::Mnemonic(MnemonicError::InvalidWordCount(11)))
        ));
    }

    #[test]
    fn test_unknown_word() {
        let invalid = TEST_MNEMONIC_12.replace("about", "invalid");
        assert_eq!(
            WalletMnemonic::from_phrase(&invalid).unwrap_err(),
            WalletError::Mnemonic(MnemonicError::UnknownWord("invalid".to_string()))
        );

        let first = TEST_MNEMONIC_12.replacen("abandon", "Qwerty", 1);
        assert_eq!(
            WalletMnemonic::from_phrase_unchecked(&first).unwrap_err(),
            WalletError::Mnemonic(MnemonicError::UnknownWord("qwerty".to_string()))
        );
    }

    #[test]
    fn test_unchecked_skips_checksum_only() {
        let bad_checksum = TEST_MNEMONIC_12.replace("about", "abandon");
        let mnemonic = WalletMnemonic::from_phrase_unchecked(&bad_checksum).unwrap();
        assert_eq!(mnemonic.word_count(), 12);

        let unknown = TEST_MNEMONIC_12.replace("about", "invalid");
        assert!(WalletMnemonic::from_phrase_unchecked(&unknown).is_err());
    }

    #[test]
    fn test_to_seed_vector() {
        // BIP-39 reference vector with passphrase "TREZOR"
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        let seed = mnemonic.to_seed(Some("TREZOR")).unwrap();
        assert_eq!(
            hex::encode(&seed[..]),
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        );
    }

    #[test]
    fn test_to_seed_deterministic() {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_24).unwrap();
        let seed = mnemonic.to_seed(None).unwrap();
        assert_eq!(*seed, *mnemonic.to_seed(None).unwrap());
        assert_ne!(*seed, *mnemonic.to_seed(Some("TREZOR")).unwrap());
    }

    #[test]
    fn test_to_seed_wiped_phrase_is_error() {
        let wiped = WalletMnemonic {
            phrase: String::new(),
            word_count: 0,
        };
        assert_eq!(
            wiped.to_seed(None).unwrap_err(),
            WalletError::Mnemonic(MnemonicError::InvalidWordCount(0))
        );
    }

    #[test]
    fn test_clone_outlives_original() {
        let original = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        let expected = original.to_seed(None).unwrap();
        let copy = original.clone();
        drop(original);

        assert_eq!(copy.phrase(), TEST_MNEMONIC_12);
        assert_eq!(*copy.to_seed(None).unwrap(), *expected);
    }

    #[test]
    fn test_strength_bits() {
        assert_eq!(WalletMnemonic::new().unwrap().strength_bits(), 128);
        assert_eq!(WalletMnemonic::new_24_words().unwrap().strength_bits(), 256);
    }

    #[test]
    fn test_is_valid_word() {
        assert!(WalletMnemonic::is_valid_word("abandon"));
        assert!(WalletMnemonic::is_valid_word("zoo"));
        assert!(!WalletMnemonic::is_valid_word("hello"));
    }

    #[test]
    fn test_debug_does_not_leak_phrase() {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        let debug_output = format!("{:?}", mnemonic);

        assert!(!debug_output.contains("abandon"));
        assert!(debug_output.contains("REDACTED"));
        assert!(debug_output.contains("word_count: 12"));
    }

    #[test]
    fn test_unique_generation() {
        let m1 = WalletMnemonic::new_24_words().unwrap();
        let m2 = WalletMnemonic::new_24_words().unwrap();
        assert_ne!(m1.phrase(), m2.phrase());
    }
}
