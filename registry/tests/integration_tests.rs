//! Integration tests exercising the full pledge lifecycle:
//! authority binding → fee configuration → creation → amendment →
//! deactivation → persistence → readback.
//!
//! These tests wire the registry to the nullable ledger rails the way an
//! embedding host would, verifying the contract end-to-end — not just in
//! isolation. Timestamps are constructed directly: the registry takes the
//! current time as an explicit parameter on every stamping operation.

use pledge_nullables::{NullEscrow, NullRail};
use pledge_registry::{PledgeRegistry, PledgeTerms, RegistryError};
use pledge_types::{AccountId, Currency, PledgeFingerprint, PledgeId, RegistryParams, Timestamp};

fn acct(label: &str) -> AccountId {
    AccountId::new(label)
}

#[test]
fn full_pledge_lifecycle() {
    let created_at = Timestamp::new(1_700_000_000);
    let mut rail = NullRail::new();
    let mut escrow = NullEscrow::new();
    let mut registry = PledgeRegistry::new(acct("escrow-vault"));

    let deployer = acct("deployer");
    let authority = acct("authority");
    let owner = acct("owner");
    let beneficiary = acct("beneficiary");

    // Creation is gated on the authority reference.
    let premature = registry.create_pledge(
        &owner,
        created_at,
        PledgeTerms {
            amount: 100,
            frequency: 30,
            duration: 12,
            beneficiary: beneficiary.clone(),
            metadata: "Monthly gift".to_owned(),
            currency: Currency::Primary,
            interval: 4320,
        },
        &mut rail,
        &mut escrow,
    );
    assert_eq!(premature.unwrap_err(), RegistryError::AuthorityNotVerified);

    registry.set_authority(&deployer, authority.clone()).unwrap();

    let id = registry
        .create_pledge(
            &owner,
            created_at,
            PledgeTerms {
                amount: 100,
                frequency: 30,
                duration: 12,
                beneficiary: beneficiary.clone(),
                metadata: "Monthly gift".to_owned(),
                currency: Currency::Primary,
                interval: 4320,
            },
            &mut rail,
            &mut escrow,
        )
        .unwrap();
    assert_eq!(id, PledgeId::new(0));
    assert_eq!(registry.pledge_count(), 1);

    // Fee went to the authority, the committed amount into the escrow
    // holding the registry was initialized with.
    assert_eq!(rail.transfers().len(), 1);
    assert_eq!(rail.transfers()[0].amount, 500);
    assert_eq!(rail.transfers()[0].from, owner);
    assert_eq!(rail.transfers()[0].to, authority);
    assert_eq!(escrow.deposits().len(), 1);
    assert_eq!(&escrow.deposits()[0].holding, registry.escrow_sink());
    assert_eq!(escrow.deposits()[0].from, owner);
    assert_eq!(escrow.deposits()[0].amount, 100);

    // The host's disbursement machinery fires twice.
    assert_eq!(registry.record_execution(id).unwrap(), 1);
    assert_eq!(registry.record_execution(id).unwrap(), 2);

    // Owner amends the terms two months in; created_at is re-stamped to the
    // amendment time.
    let amended_at = Timestamp::new(created_at.as_secs() + 60 * 24 * 3600);
    registry
        .update_pledge(&owner, amended_at, id, 150, 45)
        .unwrap();
    let pledge = registry.get_pledge(id).unwrap();
    assert_eq!(pledge.amount, 150);
    assert_eq!(pledge.frequency, 45);
    assert_eq!(pledge.created_at, amended_at);
    assert_eq!(pledge.executions, 2);

    let amendment = registry.get_amendment(id).unwrap();
    assert_eq!(amendment.amended_by, owner);
    assert_eq!(amendment.amount, 150);
    assert_eq!(amendment.frequency, 45);
    assert_eq!(amendment.amended_at, amended_at);

    // Persist and restore; the restored registry behaves identically.
    let snapshot = registry.save_state();
    let mut restored = PledgeRegistry::load_state(&snapshot).unwrap();
    assert_eq!(restored.pledge_count(), 1);
    assert_eq!(
        restored.get_pledge(id).unwrap(),
        registry.get_pledge(id).unwrap()
    );

    // Deactivation ends amendments but keeps the fingerprint claimed.
    let after_deactivation = Timestamp::new(amended_at.as_secs() + 24 * 3600);
    restored.deactivate_pledge(id).unwrap();
    assert!(restored
        .update_pledge(&owner, after_deactivation, id, 200, 60)
        .is_err());
    let fingerprint = PledgeFingerprint::derive(&beneficiary, "Monthly gift");
    assert!(restored.fingerprint_exists(&fingerprint));
    assert_eq!(
        restored
            .create_pledge(
                &owner,
                after_deactivation,
                PledgeTerms {
                    amount: 1,
                    frequency: 1,
                    duration: 0,
                    beneficiary,
                    metadata: "Monthly gift".to_owned(),
                    currency: Currency::Secondary,
                    interval: 1,
                },
                &mut rail,
                &mut escrow,
            )
            .unwrap_err(),
        RegistryError::PledgeAlreadyExists
    );
}

#[test]
fn identifiers_are_sequential_and_never_reused() {
    let mut rail = NullRail::new();
    let mut escrow = NullEscrow::new();
    let mut registry = PledgeRegistry::with_params(
        acct("escrow-vault"),
        RegistryParams {
            max_pledges: 3,
            creation_fee: 0,
        },
    );
    registry.set_authority(&acct("deployer"), acct("authority")).unwrap();

    for n in 0..3u64 {
        let id = registry
            .create_pledge(
                &acct("owner"),
                Timestamp::new(1_700_000_000 + 60 * n),
                PledgeTerms {
                    amount: 10,
                    frequency: 1,
                    duration: 0,
                    beneficiary: acct("beneficiary"),
                    metadata: format!("pledge {n}"),
                    currency: Currency::Primary,
                    interval: 10,
                },
                &mut rail,
                &mut escrow,
            )
            .unwrap();
        assert_eq!(id, PledgeId::new(n));
    }

    // Deactivation frees no capacity and no identifier.
    registry.deactivate_pledge(PledgeId::new(1)).unwrap();
    assert_eq!(registry.pledge_count(), 3);
    assert_eq!(
        registry
            .create_pledge(
                &acct("owner"),
                Timestamp::new(1_700_000_300),
                PledgeTerms {
                    amount: 10,
                    frequency: 1,
                    duration: 0,
                    beneficiary: acct("beneficiary"),
                    metadata: "pledge 3".to_owned(),
                    currency: Currency::Primary,
                    interval: 10,
                },
                &mut rail,
                &mut escrow,
            )
            .unwrap_err(),
        RegistryError::MaxPledgesExceeded
    );
    assert_eq!(registry.pledge_count(), 3);
}

#[test]
fn zero_fee_still_issues_a_transfer_record() {
    // The fee leg is unconditional once validation passes: a zero fee is
    // settled as a zero-amount transfer, not skipped.
    let mut rail = NullRail::new();
    let mut escrow = NullEscrow::new();
    let mut registry = PledgeRegistry::with_params(
        acct("escrow-vault"),
        RegistryParams {
            max_pledges: 10,
            creation_fee: 0,
        },
    );
    registry.set_authority(&acct("deployer"), acct("authority")).unwrap();

    registry
        .create_pledge(
            &acct("owner"),
            Timestamp::new(1000),
            PledgeTerms {
                amount: 77,
                frequency: 12,
                duration: 1,
                beneficiary: acct("beneficiary"),
                metadata: String::new(),
                currency: Currency::Secondary,
                interval: 144,
            },
            &mut rail,
            &mut escrow,
        )
        .unwrap();

    assert_eq!(rail.transfers().len(), 1);
    assert_eq!(rail.transfers()[0].amount, 0);
    assert_eq!(escrow.deposits()[0].holding, acct("escrow-vault"));
    assert_eq!(escrow.deposits()[0].amount, 77);
}
