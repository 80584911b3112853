use platform_session::Actor;

/// A named read operation backed by one upstream resource.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Endpoint {
    /// GraphQL operation name, used in logs.
    pub operation: &'static str,
    pub actor: Actor,
    /// Resource path below the actor namespace, e.g. `charts/KPIENDFREEPERIOD`.
    pub path: &'static str,
    /// What is being fetched, phrased to complete
    /// "lors de la récupération …" in user-facing messages.
    pub subject: &'static str,
}
