//! End-to-end builder tests: build a mission, serialize it, read it back.

use mission_schema::{DrawObject, GameMode, Mission};
use mission_spec::MissionSpec;
use pretty_assertions::assert_eq;

fn obstacle_course() -> MissionSpec {
    let mut spec = MissionSpec::new();
    spec.set_summary("Run the obstacle course");
    spec.time_limit_in_seconds(45.0);
    spec.set_time_of_day(6000, false);
    spec.draw_cuboid(-5, 45, -5, 5, 50, 5, "air");
    spec.draw_line(-5, 44, 0, 5, 44, 0, "stone");
    spec.draw_sphere(0, 48, 0, 2, "glass");
    spec.draw_block(5, 44, 0, "gold_block");
    spec.draw_item(5, 45, 0, "apple");
    spec.start_at(-5, 45, 0);
    spec.end_at(5, 45, 0);
    spec.reward_for_reaching_position(5, 45, 0, 100.0, 1.1);
    spec.observe_recent_commands();
    spec.observe_hot_bar();
    spec.observe_full_inventory();
    spec.observe_grid(-1, -1, -1, 1, 1, 1, "near");
    spec.observe_distance(5, 45, 0, "Goal");
    spec.observe_chat();
    spec.remove_all_command_handlers();
    spec.allow_continuous_movement_command("move");
    spec.allow_continuous_movement_command("turn");
    spec.allow_all_chat_commands();
    spec
}

#[test]
fn built_mission_round_trips_through_xml() {
    let spec = obstacle_course();
    let xml = spec.as_xml(true).unwrap();

    let reloaded = MissionSpec::from_xml(&xml, true).unwrap();
    assert_eq!(spec.mission(), reloaded.mission());
}

#[test]
fn built_mission_validates() {
    obstacle_course().mission().validate().unwrap();
}

#[test]
fn built_xml_carries_expected_elements() {
    let xml = obstacle_course().as_xml(false).unwrap();

    assert!(xml.contains("xmlns=\"http://ProjectMalmo.microsoft.com\""));
    assert!(xml.contains("<Summary>Run the obstacle course</Summary>"));
    assert!(xml.contains("<StartTime>6000</StartTime>"));
    assert!(xml.contains("type=\"gold_block\""));
    assert!(xml.contains("<ObservationFromChat/>"));
    assert!(xml.contains("ModifierList type=\"allow-list\""));
    assert!(xml.contains("<command>move</command>"));
    assert!(xml.contains("<ChatCommands/>"));
    // Handlers that were never requested stay out of the document.
    assert!(!xml.contains("InventoryCommands"));
    assert!(!xml.contains("VideoProducer"));
}

#[test]
fn draw_calls_keep_their_order() {
    let spec = obstacle_course();
    let objects = &spec
        .mission()
        .server
        .handlers
        .drawing_decorator
        .as_ref()
        .unwrap()
        .objects;

    assert_eq!(objects.len(), 5);
    assert!(matches!(objects[0], DrawObject::DrawCuboid { .. }));
    assert!(matches!(objects[1], DrawObject::DrawLine { .. }));
    assert!(matches!(objects[2], DrawObject::DrawSphere { .. }));
    assert!(matches!(objects[3], DrawObject::DrawBlock { .. }));
    assert!(matches!(objects[4], DrawObject::DrawItem { .. }));
}

#[test]
fn multi_agent_mission_loaded_from_xml() {
    let xml = r#"<Mission xmlns="http://ProjectMalmo.microsoft.com">
      <About><Summary>Tag</Summary></About>
      <ServerSection>
        <ServerHandlers><DefaultWorldGenerator/></ServerHandlers>
      </ServerSection>
      <AgentSection mode="Survival">
        <Name>Chaser</Name>
        <AgentStart/>
        <AgentHandlers>
          <VideoProducer want_depth="false"><Width>160</Width><Height>120</Height></VideoProducer>
        </AgentHandlers>
      </AgentSection>
      <AgentSection mode="Spectator">
        <Name>Watcher</Name>
        <AgentStart/>
        <AgentHandlers/>
      </AgentSection>
    </Mission>"#;

    let mut spec = MissionSpec::from_xml(xml, true).unwrap();
    assert_eq!(spec.number_of_agents(), 2);
    assert!(spec.is_video_requested(0));
    assert!(!spec.is_video_requested(1));
    assert_eq!(spec.video_width(0).unwrap(), 160);
    assert_eq!(spec.mission().agents[1].mode, GameMode::Spectator);

    // Single-agent mutators only ever touch the first agent.
    spec.set_mode_to_creative();
    assert_eq!(spec.mission().agents[0].mode, GameMode::Creative);
    assert_eq!(spec.mission().agents[1].mode, GameMode::Spectator);
}

#[test]
fn default_mission_matches_schema_defaults() {
    let spec = MissionSpec::new();
    let parsed = Mission::from_xml(&spec.as_xml(false).unwrap(), true).unwrap();
    assert_eq!(&parsed, spec.mission());
}
