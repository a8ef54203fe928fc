// CLI maze pilot with ratatui.
// Modes: `interactive` (WASD/arrow keys, Q to quit) and `auto` (A* replanning).
// Tiles: '%' wall, 'P' agent, 'G' hazard, '.' item, 'O' power item, 'E' exit.

use std::io::Write;

use PathEngine::console_interface::{
    ConsoleInput, MazeRenderState, ParsedLevel, cleanup_terminal, handle_input, parse_level,
    render_maze, setup_terminal,
};
use PathEngine::core::{
    Action, Cell, Direction, MAX_AUTO_ITERATIONS, MAZE_ROTATION_STEPS, MazeGrid, POWER_UP_STEPS,
    Vec2, WorldSnapshot,
};
use PathEngine::planner::{Autopilot, Planner, run_summary_json};
use rand::prelude::*;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;

const LEVEL: &str = "\
P  .  %      .O
 %%% % %%%%% %
   .  G     .
 % %%%%%%%%% %
 %  . O   .  %
 % %%%%%%%%% %
      G
 %%% % %%%%% %
O  .  %  .   %E";

struct HazardWalker {
    pos: Vec2,
    dir: Vec2,
}

impl HazardWalker {
    fn new(pos: Vec2) -> HazardWalker {
        HazardWalker {
            pos,
            dir: Vec2::new(1, 0),
        }
    }

    // Bounce-on-wall walker: reverse instead of entering a wall or leaving
    // the grid, move otherwise.
    fn update(&mut self, grid: &MazeGrid) {
        let next = Vec2::new(self.pos.x + self.dir.x, self.pos.y + self.dir.y);
        if !grid.in_bounds(next) || grid.is_wall(next) {
            self.dir = Vec2::new(-self.dir.x, -self.dir.y);
        } else {
            self.pos = next;
        }
    }
}

struct Sim {
    agent: Vec2,
    hazards: Vec<HazardWalker>,
    power_steps: u32,
    steps: u32,
    last_rotation_step: u32,
    path: Vec<Action>,
}

impl Sim {
    fn new(agent: Vec2, hazards: Vec<Vec2>) -> Sim {
        Sim {
            agent,
            hazards: hazards.into_iter().map(HazardWalker::new).collect(),
            power_steps: 0,
            steps: 0,
            last_rotation_step: 0,
            path: Vec::new(),
        }
    }

    fn hazard_positions(&self) -> Vec<Vec2> {
        self.hazards.iter().map(|h| h.pos).collect()
    }

    fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::new(self.hazard_positions(), self.power_steps > 0)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let switch = std::env::args().nth(1).unwrap_or("auto".to_string());

    let parsed = parse_level(LEVEL);
    let mut terminal = setup_terminal()?;

    match switch.as_str() {
        "interactive" => run_interactive(parsed, &mut terminal),
        "auto" => run_auto(parsed, &mut terminal),
        _ => {
            println!("Unknown mode: {}. Use 'interactive' or 'auto'. Defaulting to auto", switch);
            run_auto(parsed, &mut terminal)
        }
    }
}

fn run_interactive(
    parsed: ParsedLevel,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let ParsedLevel {
        mut grid,
        agent,
        hazards,
    } = parsed;
    let mut sim = Sim::new(agent, hazards);
    let mut rng = rand::rng();
    let mut status = "Controls: WASD or arrow keys, Q to quit".to_string();

    render_state(terminal, &grid, &sim, &status)?;

    loop {
        match handle_input()? {
            ConsoleInput::Quit => break,
            ConsoleInput::Move(dir) => {
                apply_move(&mut grid, &mut sim, dir, &mut rng);
                for hazard in &mut sim.hazards {
                    hazard.update(&grid);
                }

                if let Some(new_grid) = maybe_rotate(&grid, &mut sim) {
                    grid = new_grid;
                }

                if hazard_collision(&sim) {
                    status = "GAME OVER".to_string();
                    render_state(terminal, &grid, &sim, &status)?;
                    wait_for_key()?;
                    break;
                }
                if victory(&grid, &sim) {
                    status = format!("YOU WIN! Total steps: {}", sim.steps);
                    render_state(terminal, &grid, &sim, &status)?;
                    wait_for_key()?;
                    break;
                }

                render_state(terminal, &grid, &sim, &status)?;
            }
            _ => {}
        }
    }

    cleanup_terminal()?;
    Ok(())
}

fn run_auto(
    parsed: ParsedLevel,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let ParsedLevel {
        grid,
        agent,
        hazards,
    } = parsed;
    let mut pilot = Autopilot::new(Planner::new(grid));
    let mut sim = Sim::new(agent, hazards);
    let mut rng = rand::rng();

    std::fs::create_dir_all("exports")?;
    let mut log_out = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open("exports/pilot.log")?;

    let mut status = "Auto (replanning dynamic)".to_string();
    let mut iters = 0;

    while iters < MAX_AUTO_ITERATIONS {
        if let ConsoleInput::Quit = handle_input()? {
            break;
        }

        let snapshot = sim.snapshot();
        // The sim moves in whole cells, so every tick is a decision point.
        if pilot.should_replan(true, sim.agent, &snapshot) {
            let Some((action, cost)) = pilot.next_action(sim.agent, &snapshot) else {
                status = "No path found (replanning failed)".to_string();
                render_auto(terminal, &pilot, &sim, &status)?;
                break;
            };
            writeln!(
                log_out,
                "iter {} agent ({},{}) action {:?} cost {}",
                iters, sim.agent.x, sim.agent.y, action, cost
            )?;

            match action {
                Action::Move(dir) => {
                    apply_move(pilot.planner_mut().grid_mut(), &mut sim, dir, &mut rng);
                }
                Action::Teleport => {
                    teleport_from_corner(pilot.planner().grid(), &mut sim, &mut rng);
                }
                Action::Stop => {
                    if victory(pilot.planner().grid(), &sim) {
                        status = format!("YOU WIN! Total steps: {}", sim.steps);
                        render_auto(terminal, &pilot, &sim, &status)?;
                        wait_for_key()?;
                        break;
                    }
                }
            }
        }

        for hazard in &mut sim.hazards {
            hazard.update(pilot.planner().grid());
        }

        if let Some(new_grid) = maybe_rotate(pilot.planner().grid(), &mut sim) {
            // Geometry changed: the planner swap also drops the distance cache.
            pilot.planner_mut().replace_grid(new_grid);
        }

        if hazard_collision(&sim) {
            status = "GAME OVER".to_string();
            render_auto(terminal, &pilot, &sim, &status)?;
            wait_for_key()?;
            break;
        }
        if victory(pilot.planner().grid(), &sim) {
            status = format!("YOU WIN! Total steps: {}", sim.steps);
            render_auto(terminal, &pilot, &sim, &status)?;
            wait_for_key()?;
            break;
        }

        render_auto(terminal, &pilot, &sim, &status)?;
        iters += 1;
    }

    cleanup_terminal()?;

    let summary = run_summary_json(pilot.stats(), &sim.path);
    std::fs::write("exports/run_summary.json", &summary)?;
    println!("{}", summary);
    if iters >= MAX_AUTO_ITERATIONS {
        println!("[WARN] Auto mode reached iteration limit.");
    }

    Ok(())
}

/// Moves the agent one cell, wrapping on x, blocking on walls unless
/// powered up, collecting whatever the target cell holds, and applying the
/// corner teleport rule on arrival.
fn apply_move(grid: &mut MazeGrid, sim: &mut Sim, dir: Direction, rng: &mut ThreadRng) -> bool {
    let (dx, dy) = dir.delta();
    let mut nx = sim.agent.x + dx;
    let ny = sim.agent.y + dy;
    if nx < 0 {
        nx = grid.width() - 1;
    } else if nx >= grid.width() {
        nx = 0;
    }
    if ny < 0 || ny >= grid.height() {
        return false;
    }

    let next = Vec2::new(nx, ny);
    if grid.is_wall(next) && sim.power_steps == 0 {
        return false;
    }

    sim.agent = next;
    sim.steps += 1;
    sim.path.push(Action::Move(dir));

    match grid.cell_at(next) {
        Some(Cell::Item) => grid.remove_item(next),
        Some(Cell::PowerItem) => {
            grid.remove_item(next);
            sim.power_steps = POWER_UP_STEPS;
        }
        _ => {}
    }
    if sim.power_steps > 0 {
        sim.power_steps -= 1;
    }

    if grid.corners().contains(&sim.agent) {
        teleport_from_corner(grid, sim, rng);
    }
    true
}

/// The physical corner rule: landing on a corner flings the agent to a
/// random other corner. Randomness lives here in the driver; the engine
/// itself is deterministic.
fn teleport_from_corner(grid: &MazeGrid, sim: &mut Sim, rng: &mut ThreadRng) {
    let corners = grid.corners();
    if !corners.contains(&sim.agent) {
        return;
    }
    let targets: Vec<Vec2> = corners
        .iter()
        .copied()
        .filter(|&c| c != sim.agent)
        .collect();
    if let Some(&target) = targets.choose(rng) {
        sim.agent = target;
        sim.path.push(Action::Teleport);
    }
}

/// Every `MAZE_ROTATION_STEPS` agent steps the maze turns 90 degrees
/// clockwise and every actor coordinate is rebased with it.
fn maybe_rotate(grid: &MazeGrid, sim: &mut Sim) -> Option<MazeGrid> {
    if sim.steps == 0
        || sim.steps % MAZE_ROTATION_STEPS != 0
        || sim.steps == sim.last_rotation_step
    {
        return None;
    }
    sim.last_rotation_step = sim.steps;

    let old_height = grid.height();
    let rotated = grid.rotated_right();
    sim.agent = clamp_to(rotated.width(), rotated.height(), sim.agent.rotated_right(old_height));
    for hazard in &mut sim.hazards {
        hazard.pos = clamp_to(
            rotated.width(),
            rotated.height(),
            hazard.pos.rotated_right(old_height),
        );
        hazard.dir = Vec2::new(-hazard.dir.y, hazard.dir.x);
    }
    Some(rotated)
}

fn clamp_to(width: i32, height: i32, pos: Vec2) -> Vec2 {
    Vec2::new(pos.x.clamp(0, width - 1), pos.y.clamp(0, height - 1))
}

fn hazard_collision(sim: &Sim) -> bool {
    sim.power_steps == 0 && sim.hazards.iter().any(|h| h.pos == sim.agent)
}

fn victory(grid: &MazeGrid, sim: &Sim) -> bool {
    let Some(exit) = grid.exit() else {
        return false;
    };
    grid.item_cells().is_empty() && sim.agent.manhattan(exit) <= 1
}

fn render_state(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    grid: &MazeGrid,
    sim: &Sim,
    status: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    render_maze(
        terminal,
        grid,
        &MazeRenderState {
            agent: sim.agent,
            hazards: sim.hazard_positions(),
            power_steps: sim.power_steps,
            status: status.to_string(),
        },
    )
}

fn render_auto(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    pilot: &Autopilot,
    sim: &Sim,
    status: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let stats = pilot.stats();
    let line = format!(
        "{} | steps {} | replans {} | planned cost {}",
        status, sim.steps, stats.replans, stats.planned_cost
    );
    render_state(terminal, pilot.planner().grid(), sim, &line)
}

fn wait_for_key() -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match handle_input()? {
            ConsoleInput::Timeout => {}
            _ => return Ok(()),
        }
    }
}
