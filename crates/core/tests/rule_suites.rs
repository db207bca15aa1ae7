//! Behaviour suites exercising each rule engine through the public API

use std::cell::Cell;
use std::thread;
use std::time::{Duration, Instant};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use rulebook_core::{
    ArithmeticService, CatalogRecord, DivisionError, EligibilityEvaluator, FeeSchedule,
    InterruptibleSleeper, Interrupted, LateFeeRecord, Ledger, Rank, Sleeper,
    DEFAULT_SEARCH_LATENCY,
};

/// Sleeper that advances a virtual clock instead of blocking
#[derive(Default)]
struct VirtualClock {
    elapsed: Cell<Duration>,
}

impl Sleeper for VirtualClock {
    fn sleep(&self, duration: Duration) -> Result<(), Interrupted> {
        self.elapsed.set(self.elapsed.get() + duration);
        Ok(())
    }
}

mod ledger {
    use super::*;

    fn opened() -> Ledger {
        Ledger::new(dec!(10000)).unwrap()
    }

    #[test]
    fn test_deposit_then_withdraw_sequence() {
        let mut ledger = opened();

        ledger.deposit(dec!(5000)).unwrap();
        assert_eq!(ledger.balance(), dec!(15000), "New balance should be 15000");

        let err = ledger.deposit(dec!(-500)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: Deposit amount must be positive"
        );
        assert_eq!(ledger.balance(), dec!(15000));

        ledger.withdraw(dec!(8000)).unwrap();
        assert_eq!(ledger.balance(), dec!(7000));
    }

    #[test]
    fn test_withdraw_from_fresh_account() {
        let mut ledger = opened();
        ledger.withdraw(dec!(8000)).unwrap();
        assert_eq!(ledger.balance(), dec!(2000), "Remaining balance should be 2000");
    }

    #[test]
    fn test_overdraw_rejected() {
        let mut ledger = opened();
        let err = ledger.withdraw(dec!(45000)).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(ledger.balance(), dec!(10000));
    }

    #[test]
    fn test_negative_opening_balance_rejected() {
        for initial in [dec!(-1), dec!(-0.0001), dec!(-10000)] {
            assert!(Ledger::new(initial).unwrap_err().is_invalid_argument());
        }
        for initial in [Decimal::ZERO, dec!(0.01), dec!(10000)] {
            assert_eq!(Ledger::new(initial).unwrap().balance(), initial);
        }
    }
}

mod late_fees {
    use super::*;

    #[test]
    fn test_late_fee_for_each_title() {
        let cases: Vec<(LateFeeRecord, Option<Decimal>)> = vec![
            (LateFeeRecord::new("Atomic Habits", 5), Some(dec!(10))),
            (LateFeeRecord::new("Show your work", 15), Some(dec!(50))),
            (LateFeeRecord::new("Psychology of money", 0), Some(dec!(0))),
            (LateFeeRecord::new("Deep Work", -3), None),
            (LateFeeRecord::new("Eat the frog", 8), Some(dec!(19))),
        ];

        for (record, expected) in cases {
            let fee = record.calculate_late_fee();
            match expected {
                Some(amount) => assert_eq!(
                    fee.unwrap(),
                    amount,
                    "late fee incorrect for {}",
                    record.title()
                ),
                None => assert!(
                    fee.unwrap_err().is_invalid_argument(),
                    "negative days late should fail for {}",
                    record.title()
                ),
            }
        }
    }

    #[test]
    fn test_tier_edges_are_exact() {
        let schedule = FeeSchedule::default();
        assert_eq!(schedule.calculate_late_fee(5).unwrap(), dec!(10));
        assert_eq!(schedule.calculate_late_fee(10).unwrap(), dec!(25));
        assert!(schedule.calculate_late_fee(-1).is_err());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_calculator_operations() {
        let calc = ArithmeticService::new();
        assert_eq!(calc.add(2, 3).unwrap(), 5, "Addition result should be 5");
        assert_eq!(calc.subtract(6, 3).unwrap(), 3, "Subtraction result should be 3");
        assert!(calc.subtract(1, 5).unwrap_err().is_invalid_argument());
        assert_eq!(calc.divide(8, 0), Err(DivisionError));
        assert_eq!(calc.divide(8, 2), Ok(4));
    }
}

mod catalog {
    use super::*;

    fn laptop() -> CatalogRecord {
        CatalogRecord::new("Lenovo LOQ", dec!(65000), true)
    }

    fn mobile() -> CatalogRecord {
        CatalogRecord::new("Samsung S21", dec!(45000), false)
    }

    mod laptop_cases {
        use super::*;

        #[test]
        fn test_product_properties() {
            let laptop = laptop();
            assert!(!laptop.name().is_empty(), "Product name should be set");
            assert!(laptop.price() > Decimal::ZERO, "Product price should be positive");
            assert!(laptop.is_in_stock(), "Product should be in stock");
        }
    }

    mod mobile_cases {
        use super::*;

        #[test]
        fn test_product_out_of_stock() {
            assert!(!mobile().is_in_stock(), "product should be out of stock");
        }

        #[test]
        fn test_search_within_time_budget() {
            let clock = VirtualClock::default();
            mobile().fetch_search_results(&clock).unwrap();
            assert_eq!(clock.elapsed.get(), DEFAULT_SEARCH_LATENCY);
            assert!(clock.elapsed.get() <= Duration::from_millis(5000));
        }

        #[test]
        fn test_real_search_completes_within_deadline() {
            let sleeper = InterruptibleSleeper::new();
            let started = Instant::now();
            mobile()
                .fetch_search_results_within(&sleeper, Duration::from_millis(30))
                .unwrap();
            assert!(started.elapsed() < Duration::from_millis(5000));
        }

        #[test]
        fn test_search_interrupted_by_watchdog() {
            let sleeper = InterruptibleSleeper::new();
            let handle = sleeper.handle();
            let watchdog = thread::spawn(move || {
                thread::sleep(Duration::from_millis(50));
                handle.interrupt();
            });

            let err = mobile().fetch_search_results(&sleeper).unwrap_err();
            watchdog.join().unwrap();
            assert!(err.is_interrupted());
        }
    }
}

mod student {
    use super::*;

    #[test]
    fn test_exam_eligibility_table() {
        let evaluator = EligibilityEvaluator::new();
        let table = [
            (75, 80, true),
            (60, 70, true),
            (40, 55, false),
            (75, 0, true),
            (0, 60, true),
        ];
        for (attendance, lectures, expected) in table {
            assert_eq!(
                evaluator.is_eligible_for_exam(attendance, lectures),
                expected,
                "attendance = {}, lectures = {}",
                attendance,
                lectures
            );
        }
    }

    #[test]
    fn test_toppers() {
        let evaluator = EligibilityEvaluator::new();
        for gpa in [9.8, 9.1, 9.2] {
            assert_eq!(evaluator.get_rank(gpa), Rank::Topper, "gpa = {}", gpa);
        }
        assert_eq!(evaluator.get_rank(7.5).label(), "First Class");
        assert_eq!(evaluator.get_rank(5.9).label(), "fail");
    }

    #[test]
    fn test_passing_marks() {
        let evaluator = EligibilityEvaluator::new();
        for marks in [90, 50, 65] {
            assert!(evaluator.has_passed(marks), "marks = {}", marks);
        }
        assert!(!evaluator.has_passed(49));
    }

    #[test]
    fn test_repeated_calls_agree() {
        let evaluator = EligibilityEvaluator::new();
        let schedule = FeeSchedule::standard();
        let calc = ArithmeticService::new();
        for _ in 0..3 {
            assert_eq!(evaluator.get_rank(8.1), Rank::FirstClass);
            assert!(!evaluator.is_eligible_for_exam(40, 55));
            assert_eq!(schedule.calculate_late_fee(12).unwrap(), dec!(35));
            assert_eq!(calc.divide(9, 4), Ok(2));
        }
    }
}
