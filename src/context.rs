/// This enumerates the different components of a connection string that
/// carry percent-encoded text, and is used to say where decoding failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Context {
    /// The protocol, before `://`.
    Protocol,

    /// The user name in the credentials block.
    User,

    /// The password in the credentials block.
    Password,

    /// One of the `/`-prefixed path segments.
    Segment,

    /// The name half of a `name=value` query parameter.
    ParamName,

    /// The value half of a `name=value` query parameter.
    ParamValue,
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Context::Protocol => write!(f, "protocol"),
            Context::User => write!(f, "user"),
            Context::Password => write!(f, "password"),
            Context::Segment => write!(f, "segment"),
            Context::ParamName => write!(f, "parameter name"),
            Context::ParamValue => write!(f, "parameter value"),
        }
    }
}
