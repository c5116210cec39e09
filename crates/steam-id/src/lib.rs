//! SteamID64 handling.
//!
//! Steam accounts are identified by a 64-bit integer that is usually presented as a 17-digit
//! decimal string (e.g. `76561197960287930`). This crate only concerns itself with that textual
//! shape; it does not check whether an account actually exists.

#[macro_use(Display, Error)]
extern crate derive_more as _;

pub use self::error::ParseSteamIdError;
use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

mod error;

#[cfg(feature = "serde")]
mod serde_impls;

/// A [SteamID] in its 64-bit representation.
///
/// [SteamID]: https://developer.valvesoftware.com/wiki/SteamID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SteamId(u64);

impl SteamId
{
	/// The number of decimal digits in a textual SteamID64.
	pub const DIGITS: usize = 17;

	/// Returns the 64-bit representation of this [`SteamId`].
	pub const fn as_u64(&self) -> u64
	{
		self.0
	}

	/// Checks whether `input` is exactly [`DIGITS`] ASCII decimal digits.
	///
	/// [`DIGITS`]: SteamId::DIGITS
	pub fn is_valid_id64(input: &str) -> bool
	{
		Self::parse_id64(input).is_ok()
	}

	/// Parses a textual SteamID64.
	///
	/// The input must consist of exactly [`DIGITS`] ASCII decimal digits. Signs, whitespace and
	/// any other characters are rejected.
	///
	/// [`DIGITS`]: SteamId::DIGITS
	pub fn parse_id64(input: &str) -> Result<Self, ParseSteamIdError>
	{
		if input.is_empty() {
			return Err(ParseSteamIdError::Empty);
		}

		if let Some((position, character)) =
			input.char_indices().find(|(_, character)| !character.is_ascii_digit())
		{
			return Err(ParseSteamIdError::InvalidCharacter { position, character });
		}

		// every char is an ASCII digit at this point, so bytes == chars
		if input.len() != Self::DIGITS {
			return Err(ParseSteamIdError::InvalidLength { length: input.len() });
		}

		// 17 digits always fit into a u64
		input
			.bytes()
			.try_fold(0_u64, |acc, digit| acc.checked_mul(10)?.checked_add(u64::from(digit - b'0')))
			.map(Self)
			.ok_or(ParseSteamIdError::InvalidLength { length: input.len() })
	}
}

impl fmt::Display for SteamId
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(fmt, "{:0width$}", self.0, width = Self::DIGITS)
	}
}

impl Borrow<u64> for SteamId
{
	fn borrow(&self) -> &u64
	{
		&self.0
	}
}

impl AsRef<u64> for SteamId
{
	fn as_ref(&self) -> &u64
	{
		self.borrow()
	}
}

impl Deref for SteamId
{
	type Target = u64;

	fn deref(&self) -> &Self::Target
	{
		self.borrow()
	}
}

impl FromStr for SteamId
{
	type Err = ParseSteamIdError;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		Self::parse_id64(value)
	}
}

impl TryFrom<&str> for SteamId
{
	type Error = ParseSteamIdError;

	fn try_from(value: &str) -> Result<Self, Self::Error>
	{
		Self::parse_id64(value)
	}
}
