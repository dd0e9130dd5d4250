// Session behavior driven through scripted simulators and key events

mod common;

use common::*;
use crossterm::event::KeyCode;
use dbg6502::config::{NmiPolicy, SessionConfig};
use dbg6502::machine::{ActionResult, Registers, MEMORY_LINES};
use dbg6502::ui::{Command, Flow, Pane};

fn memory_row(session: &TestSession, line: usize) -> String {
    session.pane(Pane::Memory).row_text(line).expect("memory line")
}

#[test]
fn test_initial_screen_shows_every_pane() {
    let mut s = session(vec![]);
    s.run(&mut ScriptedEvents::keys("")).unwrap();

    assert!(screen_row(&s, 0).contains("COMMANDS"));
    assert!(screen_row(&s, 4).contains("REGISTERS"));
    assert!(screen_row(&s, 8).contains("ACTION"));
    assert!(screen_row(&s, 9).starts_with("│Nothing Yet"));
    assert!(screen_row(&s, 12).contains("MEMORY"));
    assert!(screen_row(&s, 13).starts_with("│0000"));
    assert!(screen_row(&s, 22).starts_with("│0048"));
    assert!(screen_row(&s, 23).starts_with("└"));
}

#[test]
fn test_memory_write_redraws_lines_one_to_four() {
    let step = ScriptedStep::new(ActionResult::MemoryWrite(16))
        .write(0x00, 0xaa)
        .write(0x08, 0xbb)
        .write(0x10, 0x42)
        .write(0x20, 0xcc)
        .write(0x28, 0xdd);
    let mut s = session(vec![step]);

    assert_eq!(s.dispatch(Command::Step).unwrap(), Flow::Continue);

    assert_eq!(memory_row(&s, 0).trim_end(), "0000");
    assert!(memory_row(&s, 1).starts_with("0008 bb"));
    assert!(memory_row(&s, 2).starts_with("0010 42"));
    assert!(memory_row(&s, 4).starts_with("0020 cc"));
    assert_eq!(memory_row(&s, 5).trim_end(), "0028");
    assert_eq!(s.action_detail(), "modified 0010=42");
    assert_eq!(s.last_action(), "insn@0000");
}

#[test]
fn test_stack_activity_redraws_page_one() {
    let step = ScriptedStep::new(ActionResult::StackActivity)
        .write(0x01ff, 0x12)
        .write(0x0200, 0x34);
    let mut s = session(vec![step]);
    s.dispatch(Command::Step).unwrap();

    assert!(memory_row(&s, 0x3f).trim_end().ends_with(" 12"));
    assert_eq!(memory_row(&s, 0x40).trim_end(), "0200");
    assert_eq!(s.action_detail(), "modified stack");
}

#[test]
fn test_anomalies_are_logged_without_redraw() {
    let mut s = session(vec![
        ScriptedStep::new(ActionResult::UninitializedAccess).write(0x00, 0x11),
        ScriptedStep::new(ActionResult::InvalidInstruction).write(0x08, 0x22),
        ScriptedStep::new(ActionResult::NormalStep),
    ]);

    s.dispatch(Command::Step).unwrap();
    assert_eq!(s.action_detail(), "In uninitialized mem");
    assert_eq!(memory_row(&s, 0).trim_end(), "0000");

    s.dispatch(Command::Step).unwrap();
    assert_eq!(s.action_detail(), "Not an instruction");
    assert_eq!(memory_row(&s, 1).trim_end(), "0008");

    s.dispatch(Command::Step).unwrap();
    assert_eq!(s.action_detail(), "");
    assert_eq!(
        s.pane(Pane::Action).row_text(2).unwrap().trim_matches(|c| c == '│' || c == ' '),
        ""
    );
}

#[test]
fn test_step_refreshes_registers() {
    let regs = Registers {
        pc: 0x0203,
        a: 0x01,
        x: 0x02,
        y: 0x03,
        sp: 0xfd,
        cc: 0b1000_0001,
    };
    let mut s = session(vec![ScriptedStep::new(ActionResult::NormalStep).registers(regs)]);
    s.dispatch(Command::Step).unwrap();

    assert_eq!(s.registers(), regs);
    let view = s.pane(Pane::Registers);
    assert!(view.row_text(1).unwrap().contains("PC:0203 A:01 X:02 Y:03"));
    assert!(view.row_text(2).unwrap().contains("SP:01fd"));
    assert!(view.row_text(2).unwrap().contains("Flags:1......1"));
}

#[test]
fn test_step_flushes_only_the_memory_window() {
    let regs = Registers {
        pc: 0x0203,
        ..Registers::default()
    };
    let step = ScriptedStep::new(ActionResult::MemoryWrite(0x10))
        .write(0x10, 0x42)
        .registers(regs);
    let mut s = session(vec![step]);
    s.present().unwrap();

    s.dispatch(Command::Step).unwrap();
    assert!(screen_row(&s, 15).starts_with("│0010 42"));
    assert!(screen_row(&s, 5).starts_with("│PC:0000"));

    s.present().unwrap();
    assert!(screen_row(&s, 5).starts_with("│PC:0203"));
}

#[test]
fn test_reset_and_irq() {
    let mut s = session(vec![]);
    s.dispatch(Command::Irq).unwrap();
    assert_eq!(s.last_action(), "IRQ");
    s.dispatch(Command::Reset).unwrap();
    assert_eq!(s.last_action(), "RESET");
    assert_eq!(s.simulator().calls, vec!["irq", "reset"]);
}

#[test]
fn test_irq_redraws_stack_page() {
    let mut s = session(vec![]);
    s.simulator_mut().memory.set(0x01fd, 0x77);
    assert!(!memory_row(&s, 0x3f).contains("77"));
    s.dispatch(Command::Irq).unwrap();
    assert!(memory_row(&s, 0x3f).contains(" 77"));
}

#[test]
fn test_nmi_raises_nmi_by_default() {
    let mut s = session(vec![]);
    s.dispatch(Command::Nmi).unwrap();
    assert_eq!(s.last_action(), "NMI");
    assert_eq!(s.simulator().calls, vec!["nmi"]);
}

#[test]
fn test_nmi_reset_alias_policy() {
    let config = SessionConfig {
        nmi_policy: NmiPolicy::ResetAlias,
        ..SessionConfig::default()
    };
    let mut s = session_with(ScriptedSimulator::new(vec![]), AddressDisassembler, config);
    s.dispatch(Command::Nmi).unwrap();
    assert_eq!(s.last_action(), "NMI");
    assert_eq!(s.simulator().calls, vec!["reset"]);
}

#[test]
fn test_scroll_keys_move_the_view() {
    let mut s = session(vec![]);
    s.run(&mut ScriptedEvents::keys("kkl")).unwrap();
    assert_eq!(s.scroll_address(), 34 * 8);
    assert!(screen_row(&s, 13).starts_with("│0110"));

    s.run(&mut ScriptedEvents::keys("ioo")).unwrap();
    assert_eq!(s.scroll_address(), 0);
    assert!(screen_row(&s, 13).starts_with("│0000"));
}

#[test]
fn test_scroll_stops_at_last_window() {
    let mut s = session(vec![]);
    let visible = s.visible_memory_lines();

    let mut last = usize::MAX;
    while s.scroll_address() != last {
        last = s.scroll_address();
        s.dispatch(Command::ScrollDownPage).unwrap();
    }
    let mut last = usize::MAX;
    while s.scroll_address() != last {
        last = s.scroll_address();
        s.dispatch(Command::ScrollDownLine).unwrap();
    }
    assert_eq!(s.scroll_address() / 8 + visible, MEMORY_LINES);

    s.dispatch(Command::ScrollDownLine).unwrap();
    assert_eq!(s.scroll_address() / 8 + visible, MEMORY_LINES);

    s.present().unwrap();
    assert!(screen_row(&s, 22).starts_with("│fff8"));
}

#[test]
fn test_unmapped_keys_are_ignored() {
    let mut s = session(vec![]);
    s.run(&mut ScriptedEvents::keys("xyzS")).unwrap();
    assert!(s.simulator().calls.is_empty());
    assert_eq!(s.last_action(), "Nothing Yet");
}

#[test]
fn test_exit_key_ends_the_loop() {
    let mut s = session(vec![]);
    let mut events = ScriptedEvents::keys("s");
    events.0.push_back(key(KeyCode::Esc));
    events.0.push_back(key(KeyCode::Char('s')));
    s.run(&mut events).unwrap();
    assert_eq!(s.simulator().calls, vec!["execute"]);
    assert_eq!(events.0.len(), 1);
}

#[test]
fn test_rerender_is_idempotent() {
    let mut a = session(vec![ScriptedStep::new(ActionResult::MemoryWrite(8)).write(8, 1)]);
    let mut b = session(vec![ScriptedStep::new(ActionResult::MemoryWrite(8)).write(8, 1)]);
    a.dispatch(Command::Step).unwrap();
    b.dispatch(Command::Step).unwrap();
    a.present().unwrap();
    a.present().unwrap();
    b.present().unwrap();
    assert_eq!(a.pane(Pane::Memory), b.pane(Pane::Memory));
    for y in 0..24 {
        assert_eq!(screen_row(&a, y), screen_row(&b, y));
    }
}
