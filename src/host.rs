/// One entry of the host list of a connection string: a host name (or IP
/// address), a port, or both.
///
/// # Examples
///
/// ```rust
/// use connection_url::{ConnectionString, Host};
///
/// # fn main() -> Result<(), connection_url::Error> {
/// let cs = ConnectionString::parse("db1.example.com:5432,[::1]")?;
/// assert_eq!(
///     Some(vec![Host::new("db1.example.com", 5432), Host::with_name("::1")]),
///     cs.hosts
/// );
/// assert_eq!("[::1]", cs.hosts.unwrap()[1].to_string());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde_::Serialize, serde_::Deserialize),
    serde(crate = "serde_")
)]
pub struct Host {
    /// Host name, IPv4 address, or IPv6 address without its brackets.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<String>,

    /// Port number; parsing never yields `0`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub port: Option<u16>,
}

impl Host {
    /// Build a host with both a name and a port.
    pub fn new<T>(name: T, port: u16) -> Self
    where
        T: Into<String>,
    {
        Self {
            name: Some(name.into()),
            port: Some(port),
        }
    }

    /// Build a host with only a name.
    pub fn with_name<T>(name: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            name: Some(name.into()),
            port: None,
        }
    }

    /// Build a host with only a port.
    #[must_use]
    pub fn with_port(port: u16) -> Self {
        Self {
            name: None,
            port: Some(port),
        }
    }

    /// Whether the entry carries neither a usable name nor a usable port.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.as_deref().map_or(true, str::is_empty) && self.port.map_or(true, |p| p == 0)
    }
}

impl std::fmt::Display for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name.as_deref() {
            // Only IPv6 literals carry a colon; bracket them so the port
            // separator stays unambiguous.
            Some(name) if name.contains(':') => write!(f, "[{}]", name)?,
            Some(name) => write!(f, "{}", name)?,
            None => (),
        }
        match self.port {
            Some(port) if port != 0 => write!(f, ":{}", port),
            _ => Ok(()),
        }
    }
}
