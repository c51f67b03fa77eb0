use common::error::{AppError, Res};
use db::models::profile::Profile;
use sqlx::PgPool;
use uuid::Uuid;

// Declared cost of each paid action, in credits.
pub const REDESIGN_COST: i32 = 2;
pub const CONCEPT_COST: i32 = 3;
// Canonical variation cost; an earlier revision charged 1.
pub const VARIATION_COST: i32 = 2;
pub const ESTIMATE_COST: i32 = 1;
pub const INTERNAL_VIEWS_COST: i32 = 5;
pub const CREATIVITY_COST: i32 = 5;

/// How a paid action interacts with the caller's balance.
#[derive(Debug, PartialEq)]
pub enum ChargeDecision {
    /// Administrators never pay: no check, no debit.
    Waived,
    /// Balance covers the cost; debit after the action succeeds.
    Charge,
    /// Not enough credits; the action must not reach the AI service.
    Insufficient { required: i32, available: i32 },
}

pub fn charge_decision(profile: &Profile, cost: i32) -> ChargeDecision {
    if profile.is_admin {
        ChargeDecision::Waived
    } else if profile.credits < cost {
        ChargeDecision::Insufficient {
            required: cost,
            available: profile.credits,
        }
    } else {
        ChargeDecision::Charge
    }
}

/// Balance mutation seam. The production implementation is a single UPDATE;
/// tests substitute a fake to observe debits.
pub trait CreditLedger {
    fn debit(&self, user_id: Uuid, cost: i32) -> impl Future<Output = Res<i32>>;
}

pub struct PgLedger<'a>(pub &'a PgPool);

impl CreditLedger for PgLedger<'_> {
    fn debit(&self, user_id: Uuid, cost: i32) -> impl Future<Output = Res<i32>> {
        db::profile::debit_credits(self.0, user_id, cost)
    }
}

/// Outcome of a paid action: the produced result plus the balance the
/// client should display. `credits: None` with a warning means the debit
/// write failed after success and the displayed balance is stale.
pub struct Paid<T> {
    pub result: T,
    pub credits: Option<i32>,
    pub warning: Option<String>,
}

/// Runs a paid action under the credit rules:
/// insufficient balance aborts before `op` runs; admins skip both the check
/// and the debit; the debit happens exactly once, only after `op` succeeds;
/// a failed `op` never debits; a failed debit keeps the result and reports
/// a stale balance instead of failing the request.
pub async fn run_paid<T, L, F, Fut>(profile: &Profile, cost: i32, ledger: &L, op: F) -> Res<Paid<T>>
where
    L: CreditLedger,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Res<T>>,
{
    match charge_decision(profile, cost) {
        ChargeDecision::Insufficient {
            required,
            available,
        } => Err(AppError::InsufficientCredits(format!(
            "This action costs {} credits and you have {}.",
            required, available
        ))),
        ChargeDecision::Waived => {
            let result = op().await?;
            Ok(Paid {
                result,
                credits: Some(profile.credits),
                warning: None,
            })
        }
        ChargeDecision::Charge => {
            let result = op().await?;
            match ledger.debit(profile.id, cost).await {
                Ok(balance) => Ok(Paid {
                    result,
                    credits: Some(balance),
                    warning: None,
                }),
                Err(e) => {
                    log::error!("Failed to debit {} credits for {}: {}", cost, profile.id, e);
                    Ok(Paid {
                        result,
                        credits: None,
                        warning: Some(
                            "The result was generated, but the credit debit failed; your displayed balance may be stale.".to_string(),
                        ),
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::cell::{Cell, RefCell};

    fn profile(credits: i32, is_admin: bool) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            email: "user@example.com".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Silva".to_string(),
            credits,
            is_admin,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    struct FakeLedger {
        debits: RefCell<Vec<(Uuid, i32)>>,
        fail: bool,
    }

    impl FakeLedger {
        fn new() -> Self {
            Self {
                debits: RefCell::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                debits: RefCell::new(Vec::new()),
                fail: true,
            }
        }
    }

    impl CreditLedger for FakeLedger {
        fn debit(&self, user_id: Uuid, cost: i32) -> impl Future<Output = Res<i32>> {
            let fail = self.fail;
            if !fail {
                self.debits.borrow_mut().push((user_id, cost));
            }
            async move {
                if fail {
                    Err(AppError::Internal("debit write failed".to_string()))
                } else {
                    Ok(0)
                }
            }
        }
    }

    #[tokio::test]
    async fn insufficient_balance_never_reaches_the_action() {
        let user = profile(1, false);
        let ledger = FakeLedger::new();
        let called = Cell::new(false);

        let outcome = run_paid(&user, 2, &ledger, || {
            called.set(true);
            async { Ok("image") }
        })
        .await;

        assert!(matches!(outcome, Err(AppError::InsufficientCredits(_))));
        assert!(!called.get());
        assert!(ledger.debits.borrow().is_empty());
    }

    #[tokio::test]
    async fn admin_pays_nothing_regardless_of_cost() {
        let user = profile(0, true);
        let ledger = FakeLedger::new();

        let outcome = run_paid(&user, 5, &ledger, || async { Ok("image") })
            .await
            .unwrap();

        assert_eq!(outcome.result, "image");
        assert_eq!(outcome.credits, Some(0));
        assert!(ledger.debits.borrow().is_empty());
    }

    #[tokio::test]
    async fn success_debits_exactly_once() {
        let user = profile(10, false);
        let ledger = FakeLedger::new();

        let outcome = run_paid(&user, 3, &ledger, || async { Ok("image") })
            .await
            .unwrap();

        assert!(outcome.warning.is_none());
        assert_eq!(ledger.debits.borrow().as_slice(), &[(user.id, 3)]);
    }

    #[tokio::test]
    async fn failed_action_debits_nothing() {
        let user = profile(10, false);
        let ledger = FakeLedger::new();

        let outcome = run_paid(&user, 3, &ledger, || async {
            Err::<&str, _>(AppError::Upstream("model unavailable".to_string()))
        })
        .await;

        assert!(matches!(outcome, Err(AppError::Upstream(_))));
        assert!(ledger.debits.borrow().is_empty());
    }

    #[tokio::test]
    async fn failed_debit_keeps_result_and_flags_stale_balance() {
        let user = profile(10, false);
        let ledger = FakeLedger::failing();

        let outcome = run_paid(&user, 3, &ledger, || async { Ok("image") })
            .await
            .unwrap();

        assert_eq!(outcome.result, "image");
        assert_eq!(outcome.credits, None);
        assert!(outcome.warning.is_some());
    }

    #[test]
    fn decision_table() {
        assert_eq!(charge_decision(&profile(5, false), 5), ChargeDecision::Charge);
        assert_eq!(
            charge_decision(&profile(4, false), 5),
            ChargeDecision::Insufficient {
                required: 5,
                available: 4
            }
        );
        assert_eq!(charge_decision(&profile(0, true), 5), ChargeDecision::Waived);
    }
}
