#[cfg(test)]
mod test {
    use crate::core::{Action, CostPolicy, Direction, GoalSet, SearchState, Vec2, WorldSnapshot};
    use crate::test::test_util::MazeTestState;

    #[test]
    fn walled_corridor_plan_costs_its_length() {
        // A pure cardinal route: the corners are walled off so neither
        // teleports nor wrap-around can shorten it. Every step costs 1,
        // including the final collecting step (discount floored at 1), so
        // total cost equals the move count.
        let maze = MazeTestState::new(
            "\
%P%
% %
% %
% %
%.%",
        );
        let mut planner = maze.planner();

        let plan = planner.plan(maze.start_state(), &maze.snapshot());

        assert_eq!(plan.actions.len(), 5);
        assert_eq!(plan.cost, 4);
        assert_eq!(plan.actions.last(), Some(&Action::Stop));
        assert!(
            plan.actions[..4]
                .iter()
                .all(|&a| a == Action::Move(Direction::South))
        );
    }

    #[test]
    fn open_grid_plan_exploits_corner_teleports() {
        // Agent and goal both sit on corners of a fully open grid. The
        // cheapest route teleports across, steps off the goal corner and
        // back on to collect: cost 1 + 1 + 1.
        let maze = MazeTestState::new(
            "\
P
 
 
 
    .",
        );
        let mut planner = maze.planner();

        let plan = planner.plan(maze.start_state(), &maze.snapshot());

        assert_eq!(plan.cost, 3);
        assert_eq!(
            plan.actions,
            vec![
                Action::Teleport,
                Action::Move(Direction::West),
                Action::Move(Direction::East),
                Action::Stop
            ]
        );
    }

    #[test]
    fn cleared_board_routes_to_the_exit() {
        let maze = MazeTestState::new(
            "\
P
 
 
 
 
 
 
 
 
         E",
        );
        let mut planner = maze.planner();

        let start = SearchState::new(Vec2::new(0, 0), GoalSet::empty());
        let plan = planner.plan(start, &WorldSnapshot::calm());

        // 18 cardinal moves to (9, 9), then Stop.
        assert_eq!(plan.actions.len(), 19);
        assert_eq!(plan.cost, 18);
        assert_eq!(plan.actions.last(), Some(&Action::Stop));
        assert!(
            plan.actions[..18]
                .iter()
                .all(|&a| matches!(a, Action::Move(_)))
        );
    }

    #[test]
    fn cleared_board_without_an_exit_just_stops() {
        let maze = MazeTestState::new(
            "\
 P
    ",
        );
        let mut planner = maze.planner();

        let start = SearchState::new(maze.agent, GoalSet::empty());
        let plan = planner.plan(start, &WorldSnapshot::calm());

        assert_eq!(plan.actions, vec![Action::Stop]);
        assert_eq!(plan.cost, 0);
    }

    #[test]
    fn routes_around_a_hazard_instead_of_through_it() {
        // The hazard squats on the direct route; walls leave the wrap-around
        // step as the only alternative. The plan must pay the finite danger
        // penalty, never the block cost.
        let maze = MazeTestState::new(
            "\
%%%%%
P G .
%%%%%",
        );
        let policy = CostPolicy::default();
        let mut planner = maze.planner();

        let plan = planner.plan(maze.start_state(), &maze.snapshot());

        assert!(!plan.is_empty());
        assert!(plan.cost < policy.hazard_block_cost);
        assert_eq!(plan.actions[0], Action::Move(Direction::West));
    }

    #[test]
    fn sealed_goal_yields_the_empty_plan() {
        // All routes to the item are walled; the frontier drains and the
        // engine reports failure instead of hanging or panicking.
        let maze = MazeTestState::new(
            "\
P %%%
  %.%
  %%%",
        );
        let mut planner = maze.planner();

        let plan = planner.plan(maze.start_state(), &maze.snapshot());

        assert!(plan.is_empty());
        assert_eq!(plan.cost, 0);
    }

    #[test]
    fn walled_in_agent_yields_the_empty_plan() {
        let maze = MazeTestState::new(
            "\
%P%
%%%
%.%",
        );
        let mut planner = maze.planner();

        let plan = planner.plan(maze.start_state(), &maze.snapshot());

        assert!(plan.is_empty());
        assert_eq!(plan.cost, 0);
    }

    #[test]
    fn invulnerability_opens_walls_during_the_search() {
        let maze = MazeTestState::new(
            "\
%P%
%%%
%.%",
        );
        let mut planner = maze.planner();

        let plan = planner.plan(maze.start_state(), &maze.powered_snapshot());

        assert_eq!(plan.cost, 2);
        assert_eq!(
            plan.actions,
            vec![
                Action::Move(Direction::South),
                Action::Move(Direction::South),
                Action::Stop
            ]
        );
    }

    #[test]
    fn identical_inputs_give_identical_plans() {
        let maze = MazeTestState::new(
            "\
P  .  G
 %% %%
.     .",
        );
        let mut planner = maze.planner();

        let first = planner.plan(maze.start_state(), &maze.snapshot());
        let second = planner.plan(maze.start_state(), &maze.snapshot());

        assert_eq!(first, second);
    }

    #[test]
    fn compute_next_action_returns_the_first_step_and_total_cost() {
        let maze = MazeTestState::new(
            "\
%P%
% %
%.%",
        );
        let mut planner = maze.planner();

        let goals = maze.grid.item_cells();
        let (action, cost) = planner
            .compute_next_action(maze.agent, &goals, &maze.snapshot())
            .expect("a path exists");

        assert_eq!(action, Action::Move(Direction::South));
        assert_eq!(cost, 2);
    }

    #[test]
    fn compute_next_action_reports_failure_as_none() {
        let maze = MazeTestState::new(
            "\
P %%%
  %.%
  %%%",
        );
        let mut planner = maze.planner();

        let goals = maze.grid.item_cells();
        let result = planner.compute_next_action(maze.agent, &goals, &maze.snapshot());

        assert!(result.is_none());
    }

    #[test]
    fn plans_collect_every_goal_before_stopping() {
        let maze = MazeTestState::new(
            "\
%P   %
% %% %
%.  .%
%%%%%%",
        );
        let mut planner = maze.planner();

        let plan = planner.plan(maze.start_state(), &maze.snapshot());

        assert!(!plan.is_empty());
        assert_eq!(plan.actions.last(), Some(&Action::Stop));
        // Replaying the moves over the goal set must end with none left.
        let mut state = maze.start_state();
        for action in &plan.actions {
            if let Action::Move(dir) = action {
                let (dx, dy) = dir.delta();
                let next = Vec2::new(state.agent.x + dx, state.agent.y + dy);
                let goals = state.goals.without(next);
                state = SearchState::new(next, goals);
            }
        }
        assert!(state.goals.is_empty());
    }
}
