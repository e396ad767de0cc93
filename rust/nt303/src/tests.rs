use nt303_component::{Component as _, voice::test_utils::RecordingVoice};

use crate::{Component, Param};

#[test]
fn pages_split_sound_from_routing() {
    let component = Component::<RecordingVoice>::default();
    let pages = component.parameter_pages();
    let names: Vec<_> = pages.iter().map(|page| page.name).collect();
    assert_eq!(names, ["Sound", "Routing"]);
    assert_eq!(pages[0].params[0], Param::Cutoff.index());
    assert!(pages[1].params.contains(&Param::Gate.index()));
}

#[test]
fn every_parameter_is_paged_once() {
    let component = Component::<RecordingVoice>::default();
    let mut paged: Vec<_> = component
        .parameter_pages()
        .iter()
        .flat_map(|page| page.params.iter().copied())
        .collect();
    paged.sort_unstable();
    assert_eq!(paged, (0..component.parameter_infos().len()).collect::<Vec<_>>());
}
