multiversx_sc::imports!();

use crate::errors::{ERR_COUNCIL_REQUIRES_MEMBER, ERR_NOT_MEMBER, ERR_ORACLE_NOT_CONTRACT};
use crate::membership_oracle_proxy;

// ============================================================
// Membership Directory
// Answers "is this a member" / "is this a council member".
// Backed by a local list until an external oracle is set, at
// which point every lookup is delegated to the oracle.
// ============================================================

#[multiversx_sc::module]
pub trait MembershipModule {
    // ========================================================
    // Owner administration
    // ========================================================

    #[only_owner]
    #[endpoint(addMembers)]
    fn add_members(&self, members: MultiValueEncoded<ManagedAddress>) {
        for member in members {
            if self.members().insert(member.clone()) {
                self.member_added_event(&member);
            }
        }
    }

    #[only_owner]
    #[endpoint(removeMember)]
    fn remove_member(&self, member: ManagedAddress) {
        if self.members().swap_remove(&member) {
            self.member_removed_event(&member);
        }
        if self.council_members().swap_remove(&member) {
            self.council_member_removed_event(&member);
        }
    }

    #[only_owner]
    #[endpoint(addCouncilMember)]
    fn add_council_member(&self, member: ManagedAddress) {
        require!(self.members().contains(&member), ERR_COUNCIL_REQUIRES_MEMBER);
        if self.council_members().insert(member.clone()) {
            self.council_member_added_event(&member);
        }
    }

    #[only_owner]
    #[endpoint(removeCouncilMember)]
    fn remove_council_member(&self, member: ManagedAddress) {
        if self.council_members().swap_remove(&member) {
            self.council_member_removed_event(&member);
        }
    }

    #[only_owner]
    #[endpoint(addAdmin)]
    fn add_admin(&self, admin: ManagedAddress) {
        if self.admins().insert(admin.clone()) {
            self.admin_added_event(&admin);
        }
    }

    #[only_owner]
    #[endpoint(removeAdmin)]
    fn remove_admin(&self, admin: ManagedAddress) {
        if self.admins().swap_remove(&admin) {
            self.admin_removed_event(&admin);
        }
    }

    /// Hands every membership lookup to an external directory contract.
    #[only_owner]
    #[endpoint(setMembershipOracle)]
    fn set_membership_oracle(&self, oracle: ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(&oracle),
            ERR_ORACLE_NOT_CONTRACT
        );
        self.membership_oracle().set(&oracle);
        self.membership_oracle_changed_event(&oracle);
    }

    /// Falls back to the local member list.
    #[only_owner]
    #[endpoint(clearMembershipOracle)]
    fn clear_membership_oracle(&self) {
        self.membership_oracle().clear();
        self.membership_oracle_changed_event(&ManagedAddress::zero());
    }

    // ========================================================
    // Lookups
    // ========================================================

    #[view(isMember)]
    fn is_member(&self, identity: &ManagedAddress) -> bool {
        if self.membership_oracle().is_empty() {
            return self.members().contains(identity);
        }

        let oracle = self.membership_oracle().get();
        self.tx()
            .to(&oracle)
            .typed(membership_oracle_proxy::MembershipOracleProxy)
            .is_member(identity.clone())
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    #[view(isCouncilMember)]
    fn is_council_member(&self, identity: &ManagedAddress) -> bool {
        if self.membership_oracle().is_empty() {
            return self.council_members().contains(identity);
        }

        let oracle = self.membership_oracle().get();
        self.tx()
            .to(&oracle)
            .typed(membership_oracle_proxy::MembershipOracleProxy)
            .is_council_member(identity.clone())
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    /// The owner plus any registered administrators.
    #[view(isAdmin)]
    fn is_admin(&self, identity: &ManagedAddress) -> bool {
        identity == &self.blockchain().get_owner_address() || self.admins().contains(identity)
    }

    fn require_member(&self, identity: &ManagedAddress) {
        require!(self.is_member(identity), ERR_NOT_MEMBER);
    }

    #[view(getMembers)]
    fn get_members(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for member in self.members().iter() {
            result.push(member);
        }
        result
    }

    #[view(getCouncilMembers)]
    fn get_council_members(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for member in self.council_members().iter() {
            result.push(member);
        }
        result
    }

    #[view(getMembershipOracle)]
    fn get_membership_oracle(&self) -> OptionalValue<ManagedAddress> {
        if self.membership_oracle().is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.membership_oracle().get())
        }
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("memberAdded")]
    fn member_added_event(&self, #[indexed] member: &ManagedAddress);

    #[event("memberRemoved")]
    fn member_removed_event(&self, #[indexed] member: &ManagedAddress);

    #[event("councilMemberAdded")]
    fn council_member_added_event(&self, #[indexed] member: &ManagedAddress);

    #[event("councilMemberRemoved")]
    fn council_member_removed_event(&self, #[indexed] member: &ManagedAddress);

    #[event("adminAdded")]
    fn admin_added_event(&self, #[indexed] admin: &ManagedAddress);

    #[event("adminRemoved")]
    fn admin_removed_event(&self, #[indexed] admin: &ManagedAddress);

    #[event("membershipOracleChanged")]
    fn membership_oracle_changed_event(&self, #[indexed] oracle: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("members")]
    fn members(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("councilMembers")]
    fn council_members(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("admins")]
    fn admins(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("membershipOracle")]
    fn membership_oracle(&self) -> SingleValueMapper<ManagedAddress>;
}
