//! Tests for core value types.

use super::*;

fn op(attribute: Attribute, score: TrainingScore) -> Operation {
    Operation::new(attribute, score)
}

#[test]
fn test_attribute_canonical_order() {
    for (i, attribute) in Attribute::ALL.iter().enumerate() {
        assert_eq!(attribute.index(), i);
        assert_eq!(Attribute::from_index(i), Some(*attribute));
    }
    assert_eq!(Attribute::from_index(4), None);
    assert!(Attribute::Agility < Attribute::Intellect);
}

#[test]
fn test_attribute_parse() {
    assert_eq!("focus".parse::<Attribute>(), Ok(Attribute::Focus));
    assert_eq!(" Strength ".parse::<Attribute>(), Ok(Attribute::Strength));
    assert!("luck".parse::<Attribute>().is_err());
}

#[test]
fn test_score_values_and_labels() {
    assert_eq!(TrainingScore::Fail.value(), 0);
    assert_eq!(TrainingScore::SoSo.value(), 3);
    assert_eq!(TrainingScore::Good.value(), 5);
    assert_eq!(TrainingScore::Perfect.value(), 9);

    assert_eq!(TrainingScore::Fail.to_string(), "+0 FAIL");
    assert_eq!(TrainingScore::SoSo.to_string(), "+3 SO-SO");
    assert_eq!(TrainingScore::Perfect.label(), "PERFECT");

    assert_eq!(TrainingScore::try_from(5u32), Ok(TrainingScore::Good));
    assert!(TrainingScore::try_from(7u32).is_err());
}

#[test]
fn test_canonical_pool() {
    assert_eq!(ALL_OPERATIONS.len(), 12);
    for attribute in Attribute::ALL {
        let scores: Vec<_> = ALL_OPERATIONS
            .iter()
            .filter(|op| op.attribute == attribute)
            .map(|op| op.score)
            .collect();
        assert_eq!(scores, TrainingScore::NON_ZERO);
    }
}

#[test]
fn test_pool_except_high_focus() {
    assert_eq!(ALL_OPERATIONS_EXCEPT_HIGH_FOCUS.len(), 10);
    let focus: Vec<_> = ALL_OPERATIONS_EXCEPT_HIGH_FOCUS
        .iter()
        .filter(|op| op.attribute == Attribute::Focus)
        .collect();
    assert_eq!(focus, vec![&op(Attribute::Focus, TrainingScore::SoSo)]);
}

#[test]
fn test_apply_operations() {
    let status = Status::new([1, 2, 3, 4]);
    let trained = apply_operations(
        &status,
        &[
            op(Attribute::Agility, TrainingScore::Perfect),
            op(Attribute::Intellect, TrainingScore::SoSo),
            op(Attribute::Agility, TrainingScore::Good),
        ],
    );

    assert_eq!(trained, Status::new([15, 2, 3, 7]));
    assert_eq!(status, Status::new([1, 2, 3, 4]));
}

#[test]
fn test_apply_is_order_independent() {
    let status = Status::new([5, 0, 0, 9]);
    let forward = [
        op(Attribute::Focus, TrainingScore::SoSo),
        op(Attribute::Strength, TrainingScore::Perfect),
        op(Attribute::Focus, TrainingScore::Good),
    ];
    let mut backward = forward;
    backward.reverse();

    assert_eq!(status.apply(&forward), status.apply(&backward));
}

#[test]
fn test_apply_empty_sequence() {
    let status = Status::new([3, 1, 4, 1]);
    assert_eq!(status.apply(&[]), status);
}

#[test]
fn test_fail_operation_is_neutral() {
    let status = Status::new([3, 1, 4, 1]);
    assert_eq!(
        status.apply(&[op(Attribute::Focus, TrainingScore::Fail)]),
        status
    );
}

#[test]
fn test_normalize_partial() {
    let raw = RawStatus {
        strength: Some(12),
        intellect: Some(7),
        ..RawStatus::default()
    };
    assert_eq!(raw.normalize(), Status::new([0, 12, 0, 7]));
    assert_eq!(RawStatus::default().normalize(), Status::ZERO);

    let status = Status::from_partial([(Attribute::Focus, 4), (Attribute::Agility, 2)]);
    assert_eq!(status, Status::new([2, 0, 4, 0]));

    let collected: Status = [(Attribute::Focus, 1), (Attribute::Focus, 6)]
        .into_iter()
        .collect();
    assert_eq!(collected[Attribute::Focus], 6);
}

#[test]
fn test_status_helpers() {
    let status = Status::new([25, 25, 25, 25]);
    assert_eq!(status.total(), 100);
    assert!(status.is_all_equal());
    assert!(!Status::new([25, 25, 25, 26]).is_all_equal());
    assert_eq!(status.to_string(), "[25, 25, 25, 25]");

    let pairs: Vec<_> = Status::new([1, 2, 3, 4]).iter().collect();
    assert_eq!(pairs[2], (Attribute::Focus, 3));
}

#[test]
fn test_total_of_saturated_values() {
    let status = Status::new([u32::MAX; 4]);
    assert_eq!(status.total(), 4 * u64::from(u32::MAX));
    assert_eq!(Status::new([u32::MAX, 1, 0, 0]).total(), 1 << 32);

    let trained = Status::new([u32::MAX, 0, 0, 0]).with_added(Attribute::Agility, 9);
    assert_eq!(trained[Attribute::Agility], u32::MAX);
    assert_eq!(trained.total(), u64::from(u32::MAX));
}

#[test]
fn test_display_sorting_and_checklist() {
    let ops = [
        op(Attribute::Intellect, TrainingScore::Good),
        op(Attribute::Agility, TrainingScore::Perfect),
        op(Attribute::Intellect, TrainingScore::SoSo),
    ];

    let sorted = sorted_for_display(&ops);
    assert_eq!(sorted[0].attribute, Attribute::Agility);
    // stable: intellect +5 stays ahead of intellect +3
    assert_eq!(sorted[1], op(Attribute::Intellect, TrainingScore::Good));
    assert_eq!(sorted[2], op(Attribute::Intellect, TrainingScore::SoSo));

    assert_eq!(
        checklist(&ops),
        "[ ] agility +9\n[ ] intellect +5\n[ ] intellect +3"
    );
    assert_eq!(checklist(&[]), "");
}

#[test]
fn test_error_classification() {
    assert!(TrainforgeError::MissingGoal.is_contract_violation());
    assert!(TrainforgeError::InvalidStatus {
        status: Status::ZERO
    }
    .is_contract_violation());
    assert!(TrainforgeError::InvalidCap(0).is_contract_violation());
    assert!(!TrainforgeError::Cancelled.is_contract_violation());

    assert_eq!(
        TrainforgeError::InvalidStatus {
            status: Status::new([1, 2, 3, 4])
        }
        .to_string(),
        "Invalid starting status: [1, 2, 3, 4]"
    );
}
