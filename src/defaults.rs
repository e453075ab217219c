use serde_json::Value;

use super::{
    connection_string::{ConnectionString, Params},
    error::Error,
    host::Host,
};

/// Values used to fill in whatever a parsed [`ConnectionString`] left
/// unspecified.  Defaults never replace a field the connection string already
/// has; see [`ConnectionString::set_defaults`] for the per-field rules.
///
/// Defaults can be built field by field, or read from a JSON object with
/// [`Defaults::from_json`] when they come from dynamic configuration.
///
/// # Examples
///
/// ```rust
/// use connection_url::{ConnectionString, Defaults, Host};
///
/// # fn main() -> Result<(), connection_url::Error> {
/// let defaults = Defaults {
///     protocol: Some("postgres".into()),
///     hosts: Some(vec![Host::new("localhost", 5432)]),
///     ..Defaults::default()
/// };
/// let cs = ConnectionString::parse_with_defaults("bob@/app", &defaults)?;
/// assert_eq!("postgres://bob@localhost:5432/app", cs.build());
/// # Ok(())
/// # }
/// ```
///
/// [`ConnectionString`]: struct.ConnectionString.html
/// [`ConnectionString::set_defaults`]: struct.ConnectionString.html#method.set_defaults
/// [`Defaults::from_json`]: #method.from_json
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_::Serialize, serde_::Deserialize),
    serde(crate = "serde_", default)
)]
pub struct Defaults {
    /// Protocol used when the connection string has none.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub protocol: Option<String>,

    /// User name used when the connection string has none.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub user: Option<String>,

    /// Password used when the connection string has none.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub password: Option<String>,

    /// Hosts appended unless the same name and port pair is already listed.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub hosts: Option<Vec<Host>>,

    /// Path segments used when the connection string has none.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub segments: Option<Vec<String>>,

    /// Parameters added for every name not already present.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub params: Option<Params>,
}

impl Defaults {
    /// Read defaults from a JSON object.
    ///
    /// Fields are picked up leniently: a field of the wrong type is ignored,
    /// non-string segments are skipped, and a host `port` is only taken when
    /// it is an integer in `1..=65535`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDefaults`](enum.Error.html#variant.InvalidDefaults) if
    /// `value` is not a JSON object.
    pub fn from_json(value: &Value) -> Result<Self, Error> {
        let object = value.as_object().ok_or(Error::InvalidDefaults)?;
        let string = |key: &str| object.get(key).and_then(Value::as_str).map(String::from);
        Ok(Self {
            protocol: string("protocol"),
            user: string("user"),
            password: string("password"),
            hosts: object.get("hosts").and_then(Value::as_array).map(|hosts| {
                hosts
                    .iter()
                    .filter_map(Value::as_object)
                    .map(|host| Host {
                        name: host.get("name").and_then(Value::as_str).map(String::from),
                        port: host
                            .get("port")
                            .and_then(Value::as_u64)
                            .and_then(|port| u16::try_from(port).ok())
                            .filter(|port| *port != 0),
                    })
                    .collect()
            }),
            segments: object.get("segments").and_then(Value::as_array).map(|segments| {
                segments
                    .iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect()
            }),
            params: object.get("params").and_then(Value::as_object).cloned(),
        })
    }

    pub(crate) fn apply_to(&self, cs: &mut ConnectionString) {
        fill_text(&mut cs.protocol, self.protocol.as_deref());
        fill_text(&mut cs.user, self.user.as_deref());
        fill_text(&mut cs.password, self.password.as_deref());
        if let Some(default_hosts) = &self.hosts {
            let had_hosts = cs.hosts.is_some();
            let mut hosts = cs.hosts.take().unwrap_or_default();
            let existing = hosts.len();
            for default_host in default_hosts {
                if default_host.is_empty()
                    || hosts
                        .iter()
                        .any(|h| h.name == default_host.name && h.port == default_host.port)
                {
                    continue;
                }
                hosts.push(Host {
                    name: default_host.name.clone().filter(|name| !name.is_empty()),
                    port: default_host.port.filter(|port| *port != 0),
                });
            }
            let appended = hosts.len() - existing;
            tracing::debug!(appended, "applied default hosts");
            if had_hosts || appended > 0 {
                cs.hosts = Some(hosts);
            }
        }
        if cs.segments.is_none() {
            if let Some(default_segments) = &self.segments {
                let segments: Vec<String> = default_segments
                    .iter()
                    .filter(|segment| is_text(segment))
                    .cloned()
                    .collect();
                if !segments.is_empty() {
                    cs.segments = Some(segments);
                }
            }
        }
        if let Some(default_params) = self.params.as_ref().filter(|p| !p.is_empty()) {
            if let Some(params) = cs.params.as_mut() {
                let existing = params.len();
                for (name, value) in default_params {
                    params.entry(name.clone()).or_insert_with(|| value.clone());
                }
                tracing::debug!(appended = params.len() - existing, "applied default params");
            } else {
                tracing::debug!(appended = default_params.len(), "applied default params");
                cs.params = Some(default_params.clone());
            }
        }
    }
}

impl TryFrom<&Value> for Defaults {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}

impl TryFrom<Value> for Defaults {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json(&value)
    }
}

// Text means "has something other than whitespace in it".
fn is_text(text: &str) -> bool {
    text.chars().any(|c| !c.is_whitespace())
}

fn fill_text(field: &mut Option<String>, default: Option<&str>) {
    if field.is_none() {
        if let Some(default) = default.filter(|default| is_text(default)) {
            *field = Some(default.trim().to_string());
        }
    }
}
