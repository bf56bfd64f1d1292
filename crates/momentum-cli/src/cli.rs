//! Command-line argument wrappers and command handlers.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From`, so `momentum_core::params` stays free of
//! CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → GoalStore
//! ```
//!
//! [`Cli`] owns the store for the lifetime of one command, runs it, and
//! renders the outcome as markdown.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use jiff::civil::Date;
use momentum_core::{
    display::{CreateResult, DeleteResult, GoalList, OperationStatus, UpdateResult},
    params::{CreateGoal, GoalUpdate, ReorderStep, StepCreate},
    GoalStore, Intensity,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Effort level accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum IntensityArg {
    /// Gentle pace with plenty of recovery
    Light,
    /// Consistent effort to build momentum
    Moderate,
    /// High effort for ambitious goals
    Intense,
}

impl From<IntensityArg> for Intensity {
    fn from(val: IntensityArg) -> Self {
        match val {
            IntensityArg::Light => Intensity::Light,
            IntensityArg::Moderate => Intensity::Moderate,
            IntensityArg::Intense => Intensity::Intense,
        }
    }
}

/// Create a new goal
#[derive(Args)]
pub struct CreateGoalArgs {
    /// Name of the goal
    pub name: String,
    /// Optional description of the goal
    #[arg(short, long)]
    pub description: Option<String>,
    /// How hard to push
    #[arg(short, long, value_enum, default_value_t = IntensityArg::Moderate)]
    pub intensity: IntensityArg,
    /// Date to reach the goal by (YYYY-MM-DD)
    #[arg(short, long)]
    pub target_date: Option<Date>,
    /// Initial step, in order; repeat for more steps
    #[arg(short = 's', long = "step")]
    pub steps: Vec<String>,
}

impl From<CreateGoalArgs> for CreateGoal {
    fn from(val: CreateGoalArgs) -> Self {
        CreateGoal {
            name: val.name,
            description: val.description,
            intensity: val.intensity.into(),
            target_date: val.target_date,
            initial_steps: val.steps.into_iter().map(StepCreate::titled).collect(),
        }
    }
}

/// Show a goal with its steps
#[derive(Args)]
pub struct ShowGoalArgs {
    /// ID of the goal to display
    pub id: String,
}

/// Update a goal's details
#[derive(Args)]
pub struct UpdateGoalArgs {
    /// ID of the goal to update
    pub id: String,
    /// New name
    #[arg(long)]
    pub name: Option<String>,
    /// New description
    #[arg(short, long, conflicts_with = "clear_description")]
    pub description: Option<String>,
    /// Remove the description
    #[arg(long)]
    pub clear_description: bool,
    /// New effort level
    #[arg(short, long, value_enum)]
    pub intensity: Option<IntensityArg>,
    /// New target date (YYYY-MM-DD)
    #[arg(short, long, conflicts_with = "clear_target_date")]
    pub target_date: Option<Date>,
    /// Remove the target date
    #[arg(long)]
    pub clear_target_date: bool,
}

impl From<UpdateGoalArgs> for GoalUpdate {
    fn from(val: UpdateGoalArgs) -> Self {
        GoalUpdate {
            name: val.name,
            description: clearable(val.description, val.clear_description),
            intensity: val.intensity.map(Into::into),
            target_date: clearable(val.target_date, val.clear_target_date),
        }
    }
}

fn clearable<T>(value: Option<T>, clear: bool) -> Option<Option<T>> {
    if clear {
        Some(None)
    } else {
        value.map(Some)
    }
}

/// Delete a goal and all of its steps
#[derive(Args)]
pub struct DeleteGoalArgs {
    /// ID of the goal to delete
    pub id: String,
}

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a new goal
    #[command(alias = "new")]
    Create(CreateGoalArgs),
    /// List all goals, newest first
    #[command(alias = "ls")]
    List,
    /// Show a goal with its steps
    Show(ShowGoalArgs),
    /// Update a goal's details
    Update(UpdateGoalArgs),
    /// Delete a goal and all of its steps
    #[command(alias = "rm")]
    Delete(DeleteGoalArgs),
}

/// Add a step to the end of a goal
#[derive(Args)]
pub struct AddStepArgs {
    /// ID of the goal to add the step to
    pub goal_id: String,
    /// Title of the step
    pub title: String,
    /// Optional notes for the step
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl From<AddStepArgs> for (String, StepCreate) {
    fn from(val: AddStepArgs) -> Self {
        (
            val.goal_id,
            StepCreate {
                title: val.title,
                notes: val.notes,
            },
        )
    }
}

/// Refer to a single step
#[derive(Args)]
pub struct StepIdArgs {
    /// ID of the step
    pub id: String,
}

/// Move a step to a new position within its goal
#[derive(Args)]
pub struct MoveStepArgs {
    /// ID of the goal whose steps are reordered
    pub goal_id: String,
    /// Current position of the step (1-based, as listed)
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub from: u64,
    /// New position of the step (1-based)
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub to: u64,
}

impl From<MoveStepArgs> for ReorderStep {
    fn from(val: MoveStepArgs) -> Self {
        ReorderStep {
            goal_id: val.goal_id,
            from_index: position_to_index(val.from),
            to_index: position_to_index(val.to),
        }
    }
}

fn position_to_index(position: u64) -> usize {
    usize::try_from(position.saturating_sub(1)).unwrap_or(usize::MAX)
}

/// Step subcommands
#[derive(Subcommand)]
pub enum StepCommands {
    /// Add a step to the end of a goal
    Add(AddStepArgs),
    /// Mark a step complete, or incomplete again
    #[command(alias = "done")]
    Toggle(StepIdArgs),
    /// Remove a step
    #[command(alias = "rm")]
    Remove(StepIdArgs),
    /// Move a step to a new position within its goal
    #[command(alias = "mv")]
    Move(MoveStepArgs),
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Runs commands against a store and renders their results.
pub struct Cli {
    store: GoalStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: GoalStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    pub fn handle_goal_command(&mut self, command: GoalCommands) -> Result<()> {
        match command {
            GoalCommands::Create(args) => self.create_goal(args.into()),
            GoalCommands::List => self.list_goals(),
            GoalCommands::Show(args) => self.show_goal(&args.id),
            GoalCommands::Update(args) => {
                let id = args.id.clone();
                self.update_goal(&id, args.into())
            }
            GoalCommands::Delete(args) => self.delete_goal(&args.id),
        }
    }

    pub fn handle_step_command(&mut self, command: StepCommands) -> Result<()> {
        match command {
            StepCommands::Add(args) => {
                let (goal_id, params) = args.into();
                self.add_step(&goal_id, &params)
            }
            StepCommands::Toggle(args) => self.toggle_step(&args.id),
            StepCommands::Remove(args) => self.remove_step(&args.id),
            StepCommands::Move(args) => self.move_step(args.into()),
        }
    }

    pub fn show_dashboard(&self) -> Result<()> {
        self.renderer.render(&self.store.dashboard().to_string())
    }

    pub fn list_goals(&self) -> Result<()> {
        let goals = GoalList(self.store.list_goals_with_steps());
        self.renderer.render(&format!("\n{goals}"))
    }

    /// Writes any state that failed to save during the command.
    pub fn finish(mut self) -> Result<()> {
        if self.store.is_dirty() {
            self.store.flush().context("Failed to save goals")?;
        }
        Ok(())
    }

    fn create_goal(&mut self, params: CreateGoal) -> Result<()> {
        let goal = self
            .store
            .create_goal(&params)
            .context("Failed to create goal")?;
        let view = self
            .store
            .goal_with_steps(&goal.id)
            .context("Created goal is missing")?;
        self.renderer.render(&CreateResult::new(view).to_string())
    }

    fn show_goal(&self, id: &str) -> Result<()> {
        let Some(goal) = self.store.goal_with_steps(id) else {
            return self.not_found(format!("Goal {id} not found"));
        };
        self.renderer.render(&goal.to_string())
    }

    fn update_goal(&mut self, id: &str, update: GoalUpdate) -> Result<()> {
        if update.is_empty() {
            bail!("Nothing to update; pass at least one field to change");
        }
        let update = update.normalized().context("Failed to update goal")?;

        let Some(goal) = self
            .store
            .update_goal(id, &update)
            .context("Failed to update goal")?
        else {
            return self.not_found(format!("Goal {id} not found"));
        };
        let result = UpdateResult::with_changes(goal, update.describe_changes());
        self.renderer.render(&result.to_string())
    }

    fn delete_goal(&mut self, id: &str) -> Result<()> {
        let Some(goal) = self.store.delete_goal(id) else {
            return self.not_found(format!("Goal {id} not found"));
        };
        self.renderer.render(&DeleteResult::new(goal).to_string())
    }

    fn add_step(&mut self, goal_id: &str, params: &StepCreate) -> Result<()> {
        let step = self
            .store
            .add_step(goal_id, params)
            .context("Failed to add step")?;
        self.renderer.render(&CreateResult::new(step).to_string())
    }

    fn toggle_step(&mut self, id: &str) -> Result<()> {
        let Some(step) = self.store.toggle_step(id) else {
            return self.not_found(format!("Step {id} not found"));
        };
        self.renderer.render(&UpdateResult::new(step).to_string())
    }

    fn remove_step(&mut self, id: &str) -> Result<()> {
        let Some(step) = self.store.remove_step(id) else {
            return self.not_found(format!("Step {id} not found"));
        };
        self.renderer.render(&DeleteResult::new(step).to_string())
    }

    fn move_step(&mut self, params: ReorderStep) -> Result<()> {
        let steps = self
            .store
            .reorder_step(&params.goal_id, params.from_index, params.to_index)
            .context("Failed to move step")?;

        let mut output = OperationStatus::success(format!(
            "Moved step from position {} to {}",
            params.from_index + 1,
            params.to_index + 1
        ))
        .to_string();
        output.push('\n');
        for step in &steps {
            output.push_str(&step.to_string());
        }
        self.renderer.render(&output)
    }

    fn not_found(&self, message: String) -> Result<()> {
        self.renderer
            .render(&OperationStatus::failure(message.clone()).to_string())?;
        bail!(message)
    }
}
