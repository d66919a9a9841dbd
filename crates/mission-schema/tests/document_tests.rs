//! Whole-document parse and serialize tests against realistic XML.

use mission_schema::{DrawObject, GameMode, Mission, ModifierKind, SchemaError};
use pretty_assertions::assert_eq;

const SAMPLE_MISSION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Mission xmlns="http://ProjectMalmo.microsoft.com">
  <About>
    <Summary>Find the diamond</Summary>
  </About>
  <ServerSection>
    <ServerInitialConditions>
      <Time>
        <StartTime>6000</StartTime>
        <AllowPassageOfTime>false</AllowPassageOfTime>
      </Time>
    </ServerInitialConditions>
    <ServerHandlers>
      <FlatWorldGenerator generatorString="3;7,220*1,5*3,2;3;,biome_1"/>
      <DrawingDecorator>
        <DrawCuboid x1="-3" y1="45" z1="-3" x2="3" y2="50" z2="3" type="air"/>
        <DrawBlock x="0" y="45" z="0" type="gold_block"/>
        <DrawItem x="0" y="46" z="0" type="diamond"/>
      </DrawingDecorator>
      <ServerQuitFromTimeUp timeLimitMs="30000"/>
    </ServerHandlers>
  </ServerSection>
  <AgentSection mode="Creative">
    <Name>Seeker</Name>
    <AgentStart>
      <Placement x="0.5" y="46" z="-2.5"/>
    </AgentStart>
    <AgentHandlers>
      <ObservationFromGrid>
        <Grid name="floor3x3">
          <min x="-1" y="-1" z="-1"/>
          <max x="1" y="-1" z="1"/>
        </Grid>
      </ObservationFromGrid>
      <VideoProducer want_depth="true">
        <Width>320</Width>
        <Height>240</Height>
      </VideoProducer>
      <RewardForReachingPosition>
        <Marker x="0.5" y="46" z="0.5" reward="100" tolerance="1.1"/>
      </RewardForReachingPosition>
      <ContinuousMovementCommands>
        <ModifierList type="allow-list">
          <command>move</command>
          <command>turn</command>
        </ModifierList>
      </ContinuousMovementCommands>
      <ChatCommands/>
    </AgentHandlers>
  </AgentSection>
</Mission>
"#;

#[test]
fn sample_mission_parses_with_validation() {
    let mission = Mission::from_xml(SAMPLE_MISSION, true).unwrap();

    assert_eq!(mission.about.summary, "Find the diamond");
    assert_eq!(mission.agents.len(), 1);

    let agent = &mission.agents[0];
    assert_eq!(agent.mode, GameMode::Creative);
    assert_eq!(agent.name, "Seeker");

    let placement = agent.start.placement.as_ref().unwrap();
    assert_eq!((placement.x, placement.y, placement.z), (0.5, 46.0, -2.5));

    let video = agent.handlers.video_producer.as_ref().unwrap();
    assert_eq!((video.width, video.height), (320, 240));
    assert_eq!(video.channels(), 4);

    let grid = agent.handlers.observe_grid.as_ref().unwrap();
    assert_eq!(grid.grids[0].name, "floor3x3");
    assert_eq!(grid.grids[0].min.y, -1);

    let movement = agent
        .handlers
        .continuous_movement_commands
        .as_ref()
        .unwrap();
    let list = movement.modifier_list.as_ref().unwrap();
    assert_eq!(list.kind, ModifierKind::AllowList);
    assert_eq!(list.commands, vec!["move", "turn"]);

    // Plain handler element, no list: all chat verbs allowed.
    let chat = agent.handlers.chat_commands.as_ref().unwrap();
    assert!(chat.modifier_list.is_none());
}

#[test]
fn draw_order_preserved_through_reserialization() {
    let mission = Mission::from_xml(SAMPLE_MISSION, true).unwrap();
    let decorator = mission
        .server
        .handlers
        .drawing_decorator
        .as_ref()
        .unwrap();
    assert!(matches!(decorator.objects[0], DrawObject::DrawCuboid { .. }));
    assert!(matches!(decorator.objects[1], DrawObject::DrawBlock { .. }));
    assert!(matches!(decorator.objects[2], DrawObject::DrawItem { .. }));

    let rewritten = mission.to_xml(true).unwrap();
    let reparsed = Mission::from_xml(&rewritten, true).unwrap();
    assert_eq!(mission, reparsed);
}

#[test]
fn time_limit_survives_round_trip() {
    let mission = Mission::from_xml(SAMPLE_MISSION, true).unwrap();
    let quit = mission.server.handlers.quit_from_time_up.as_ref().unwrap();
    assert!((quit.time_limit_ms - 30_000.0).abs() < f32::EPSILON);
}

#[test]
fn unknown_element_rejected_when_validating() {
    let xml = SAMPLE_MISSION.replace(
        "<ChatCommands/>",
        "<ChatCommands/><SomeFutureHandler level=\"3\"/>",
    );
    // A typo'd or unknown handler must not be silently dropped: serde skips
    // elements it has no field for, so strict mode has to catch it.
    assert!(matches!(
        Mission::from_xml(&xml, true),
        Err(SchemaError::UnknownElement { ref element, ref parent })
            if element == "SomeFutureHandler" && parent == "AgentHandlers"
    ));
    // The lenient mode keeps accepting documents from newer schemas.
    Mission::from_xml(&xml, false).unwrap();
}

#[test]
fn misspelled_handler_rejected_when_validating() {
    let xml = SAMPLE_MISSION.replace("<ChatCommands/>", "<ChatComands/>");
    assert!(matches!(
        Mission::from_xml(&xml, true),
        Err(SchemaError::UnknownElement { ref element, .. }) if element == "ChatComands"
    ));
}

#[test]
fn oversized_generator_count_reported() {
    let xml = SAMPLE_MISSION.replace(
        "<FlatWorldGenerator generatorString=\"3;7,220*1,5*3,2;3;,biome_1\"/>",
        "<FlatWorldGenerator/><DefaultWorldGenerator/>",
    );
    assert!(matches!(
        Mission::from_xml(&xml, true),
        Err(SchemaError::WorldGeneratorCount { found: 2 })
    ));
}

#[test]
fn negative_video_size_reported() {
    let xml = SAMPLE_MISSION.replace("<Width>320</Width>", "<Width>-320</Width>");
    assert!(matches!(
        Mission::from_xml(&xml, true),
        Err(SchemaError::InvalidVideoSize { role: 0, width: -320, .. })
    ));
}

#[test]
fn duplicate_grid_name_reported() {
    let xml = SAMPLE_MISSION.replace(
        "</ObservationFromGrid>",
        "<Grid name=\"floor3x3\"><min x=\"0\" y=\"0\" z=\"0\"/><max x=\"1\" y=\"1\" z=\"1\"/></Grid></ObservationFromGrid>",
    );
    assert!(matches!(
        Mission::from_xml(&xml, true),
        Err(SchemaError::DuplicateGridName { .. })
    ));
}

#[test]
fn malformed_xml_is_a_parse_error() {
    let err = Mission::from_xml("<Mission><About>", false).unwrap_err();
    assert!(matches!(err, SchemaError::Parse(_)));
}
