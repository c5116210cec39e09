use {
	crate::SteamId,
	serde::{
		de::{self, Deserialize, Deserializer},
		ser::{Serialize, Serializer},
	},
	std::fmt,
};

impl Serialize for SteamId
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.serialize_id64(serializer)
	}
}

impl<'de> Deserialize<'de> for SteamId
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct Id64Visitor;

		impl de::Visitor<'_> for Id64Visitor
		{
			type Value = SteamId;

			fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
			{
				fmt.write_str("a 17-digit SteamID64")
			}

			fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				SteamId::parse_id64(value).map_err(E::custom)
			}

			fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				SteamId::parse_id64(&format!("{value:017}")).map_err(E::custom)
			}
		}

		deserializer.deserialize_any(Id64Visitor)
	}
}

impl SteamId
{
	/// Serializes as the 17-digit SteamID64 string.
	///
	/// This preserves leading zeros, so the output is always identical to the parsed input.
	pub fn serialize_id64<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_str(self)
	}
}
