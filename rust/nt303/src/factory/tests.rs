use nt303_component::{
    Component as _, ProcessingEnvironment, algorithm::Algorithm, parameters::InternalValue,
    voice::test_utils::RecordingVoice,
};
use nt303_pool::PoolError;

use super::Instances;
use crate::{Component, parameters::Param};

const ENVIRONMENT: ProcessingEnvironment = ProcessingEnvironment {
    sampling_rate: 48_000.0,
};

fn instances() -> Instances<Component<RecordingVoice>, 2> {
    Instances::new(Component::default())
}

#[test]
fn construct_and_destroy() {
    let mut instances = instances();
    assert!(instances.is_empty());
    let handle = instances.construct(&ENVIRONMENT);
    assert_eq!(instances.len(), 1);
    assert!(instances.get(handle).is_some());
    assert!(instances.destroy(handle).is_some());
    assert!(instances.is_empty());
    assert!(instances.get(handle).is_none());
    assert!(instances.destroy(handle).is_none());
}

#[test]
fn instances_are_independent() {
    let mut instances = instances();
    let first = instances.construct(&ENVIRONMENT);
    let second = instances.construct(&ENVIRONMENT);
    instances
        .get_mut(first)
        .unwrap()
        .set_parameter(Param::Accent.index(), InternalValue::Numeric(75.0))
        .unwrap();
    let accent = |handle| {
        instances
            .get(handle)
            .unwrap()
            .values()
            .numeric(Param::Accent.index())
    };
    assert_eq!(accent(first), Some(75.0));
    assert_eq!(accent(second), Some(50.0));
}

#[test]
fn full_pool_reports_exhaustion() {
    let mut instances = instances();
    instances.construct(&ENVIRONMENT);
    instances.construct(&ENVIRONMENT);
    assert_eq!(
        instances.try_construct(&ENVIRONMENT),
        Err(PoolError::Exhausted { capacity: 2 })
    );
}

#[test]
#[should_panic(expected = "pool exhausted")]
fn full_pool_halts_construction() {
    let mut instances = instances();
    for _ in 0..3 {
        instances.construct(&ENVIRONMENT);
    }
}

#[test]
fn destroyed_slot_is_reused() {
    let mut instances = instances();
    let first = instances.construct(&ENVIRONMENT);
    instances.construct(&ENVIRONMENT);
    instances.destroy(first);
    assert_eq!(instances.try_construct(&ENVIRONMENT), Ok(first));
}

#[test]
fn requirements() {
    let requirements = instances().component().requirements();
    assert_eq!(requirements.num_parameters, 15);
    assert!(requirements.instance_size > 0);
}
