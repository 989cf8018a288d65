use std::cell::RefCell;
use std::rc::Rc;

use gridnav_core::{
    tick_brains, Blackboard, Brain, BrainConfig, Policy, TickContext, WorldMut, WorldView,
};

#[derive(Default)]
struct World {
    log: Vec<(u64, u64)>,
}

impl WorldView for World {
    type Agent = u64;
}

impl WorldMut for World {}

struct Recorder;

impl Policy<World> for Recorder {
    fn tick(&mut self, ctx: &TickContext, agent: u64, world: &mut World, _bb: &mut Blackboard) {
        world.log.push((ctx.tick, agent));
    }
}

#[test]
fn brain_thinks_on_configured_cadence() {
    let mut world = World::default();
    let mut brain = Brain::new(7u64, Box::new(Recorder)).with_config(BrainConfig {
        think_every_ticks: 3,
        think_offset_ticks: 1,
    });

    let mut ctx = TickContext::new(0, 0.02);
    let mut thought = Vec::new();
    for _ in 0..9 {
        if brain.tick(&ctx, &mut world) {
            thought.push(ctx.tick);
        }
        ctx = ctx.next();
    }

    assert_eq!(thought, vec![2, 5, 8]);
}

#[test]
fn deterministic_config_spreads_agents() {
    let a = BrainConfig::deterministic(4u64, 4);
    let b = BrainConfig::deterministic(5u64, 4);
    assert_eq!(a.think_offset_ticks, 0);
    assert_eq!(b.think_offset_ticks, 1);
    assert_eq!(BrainConfig::deterministic(9u64, 0).think_every_ticks, 1);
}

#[test]
fn tick_brains_runs_in_stable_id_order() {
    let order = Rc::new(RefCell::new(Vec::new()));

    struct Shared(Rc<RefCell<Vec<u64>>>);
    impl Policy<World> for Shared {
        fn tick(&mut self, _ctx: &TickContext, agent: u64, _w: &mut World, _bb: &mut Blackboard) {
            self.0.borrow_mut().push(agent);
        }
    }

    let mut brains = vec![
        Brain::new(3u64, Box::new(Shared(order.clone())) as Box<dyn Policy<World>>),
        Brain::new(1u64, Box::new(Shared(order.clone())) as Box<dyn Policy<World>>),
        Brain::new(2u64, Box::new(Shared(order.clone())) as Box<dyn Policy<World>>),
    ];

    let mut world = World::default();
    tick_brains(&TickContext::new(0, 0.02), &mut world, &mut brains);

    assert_eq!(*order.borrow(), vec![1, 2, 3]);
}
