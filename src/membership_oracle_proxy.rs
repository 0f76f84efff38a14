use multiversx_sc::proxy_imports::*;

/// Typed calls into an external membership oracle contract exposing
/// `isMember(address) -> bool` and `isCouncilMember(address) -> bool`.
pub struct MembershipOracleProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for MembershipOracleProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = MembershipOracleProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        MembershipOracleProxyMethods { wrapped_tx: tx }
    }
}

pub struct MembershipOracleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> MembershipOracleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn is_member<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        identity: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isMember")
            .argument(&identity)
            .original_result()
    }

    pub fn is_council_member<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        identity: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isCouncilMember")
            .argument(&identity)
            .original_result()
    }
}
