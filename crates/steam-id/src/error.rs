/// Error type for conversions from strings to [`SteamId`]
///
/// [`SteamId`]: crate::SteamId
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("failed to parse SteamID64: {_variant}")]
pub enum ParseSteamIdError
{
	/// The input was empty.
	#[display("empty input")]
	Empty,

	/// The input contained something other than an ASCII digit.
	#[display("invalid character {character:?} at position {position}")]
	InvalidCharacter
	{
		position: usize, character: char
	},

	/// The input did not have exactly 17 digits.
	#[display("expected 17 digits, got {length}")]
	InvalidLength
	{
		length: usize
	},
}
