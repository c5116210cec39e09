use {
	serde::{Deserialize, Deserializer, de},
	std::{
		fmt,
		net::{IpAddr, Ipv4Addr, SocketAddr},
	},
	url::Url,
};

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct HttpConfig
{
	#[serde(default = "default_ip_addr")]
	pub ip_addr: IpAddr,

	/// Overridden by the `PORT` environment variable.
	#[serde(default = "default_port")]
	pub port: u16,

	pub cors: CorsConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct CorsConfig
{
	/// Origins allowed to make cross-origin requests.
	///
	/// If this is empty, any origin is allowed.
	#[serde(deserialize_with = "deserialize_allowed_origins")]
	pub allowed_origins: Box<[http::HeaderValue]>,
}

impl HttpConfig
{
	pub fn socket_addr(&self) -> SocketAddr
	{
		SocketAddr::new(self.ip_addr, self.port)
	}
}

impl Default for HttpConfig
{
	fn default() -> Self
	{
		Self { ip_addr: default_ip_addr(), port: default_port(), cors: CorsConfig::default() }
	}
}

impl CorsConfig
{
	pub(crate) fn allowed_origins(&self) -> impl Iterator<Item = http::HeaderValue>
	{
		self.allowed_origins.iter().cloned()
	}
}

fn default_ip_addr() -> IpAddr
{
	IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16
{
	8080
}

fn deserialize_allowed_origins<'de, D>(
	deserializer: D,
) -> Result<Box<[http::HeaderValue]>, D::Error>
where
	D: Deserializer<'de>,
{
	struct HeaderListVisitor;

	impl<'de> de::Visitor<'de> for HeaderListVisitor
	{
		type Value = Box<[http::HeaderValue]>;

		fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
		{
			fmt.write_str("a list of CORS origins")
		}

		fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
		where
			A: de::SeqAccess<'de>,
		{
			let size_hint = seq.size_hint().unwrap_or_default();
			let mut header_values = Vec::with_capacity(size_hint);

			while let Some(origin) = seq.next_element::<Url>()? {
				// `Origin` headers never carry a path, not even `/`
				let origin = origin.origin().ascii_serialization();

				match http::HeaderValue::try_from(origin) {
					Ok(header_value) => header_values.push(header_value),
					Err(err) => {
						return Err(de::Error::custom(format_args!("invalid CORS origin: {err}")));
					},
				}
			}

			Ok(header_values.into_boxed_slice())
		}
	}

	deserializer.deserialize_seq(HeaderListVisitor)
}
