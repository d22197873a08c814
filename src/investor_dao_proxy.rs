use multiversx_sc::proxy_imports::*;

use crate::types::ProposalSnapshot;

pub struct InvestorDaoProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for InvestorDaoProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = InvestorDaoProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        InvestorDaoProxyMethods { wrapped_tx: tx }
    }
}

pub struct InvestorDaoProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> InvestorDaoProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>, Arg2: ProxyArg<u64>>(
        self,
        contribution_duration: Arg0,
        vote_duration: Arg1,
        quorum_percent: Arg2,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&contribution_duration)
            .argument(&vote_duration)
            .argument(&quorum_percent)
            .original_result()
    }
}

impl<Env, From, To, Gas> InvestorDaoProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> InvestorDaoProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    // ── Commands ──

    /// Payable in EGLD; attach the contribution with `.egld(..)`.
    pub fn contribute(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("contribute")
            .original_result()
    }

    pub fn create_proposal<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        name: Arg0,
        amount: Arg1,
        recipient: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createProposal")
            .argument(&name)
            .argument(&amount)
            .argument(&recipient)
            .original_result()
    }

    pub fn vote<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("vote")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn execute_proposal<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("executeProposal")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn withdraw_ether<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        amount: Arg0,
        recipient: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawEther")
            .argument(&amount)
            .argument(&recipient)
            .original_result()
    }

    // ── Views ──

    pub fn shares<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        investor: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getShares")
            .argument(&investor)
            .original_result()
    }

    pub fn is_investor<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        principal: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isInvestor")
            .argument(&principal)
            .original_result()
    }

    pub fn total_shares(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalShares")
            .original_result()
    }

    pub fn available_funds(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAvailableFunds")
            .original_result()
    }

    pub fn total_released(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalReleased")
            .original_result()
    }

    pub fn next_proposal_id(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getNextProposalId")
            .original_result()
    }

    pub fn get_proposal<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ProposalSnapshot<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_proposals<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValueEncoded<Env::Api, ProposalSnapshot<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposals")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn get_proposals_by_creator<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        creator: Arg0,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValueEncoded<Env::Api, ProposalSnapshot<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalsByCreator")
            .argument(&creator)
            .original_result()
    }

    pub fn get_active_proposals(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValueEncoded<Env::Api, ProposalSnapshot<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getActiveProposals")
            .original_result()
    }

    pub fn has_voted<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        proposal_id: Arg0,
        principal: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasVoted")
            .argument(&proposal_id)
            .argument(&principal)
            .original_result()
    }

    pub fn get_investors<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getInvestors")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn get_treasury_config(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue4<ManagedAddress<Env::Api>, u64, u64, u64>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTreasuryConfig")
            .original_result()
    }

    pub fn get_treasury_stats(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue5<BigUint<Env::Api>, BigUint<Env::Api>, BigUint<Env::Api>, u64, u64>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTreasuryStats")
            .original_result()
    }
}
