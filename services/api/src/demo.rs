use crate::infra::InMemoryIntakeRepository;
use clap::Args;
use lead_qualifier::error::AppError;
use lead_qualifier::intake::{IntakeSubmission, LeadIntakeService, QualificationPolicy};
use lead_qualifier::qualification::{
    FormChoice, IntakeFormData, QualificationResult, ScoringEngine,
};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// JSON file containing an intake form; flags are ignored when present
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Budget range (under-10k, 10k-25k, 25k-50k, 50k-100k, 100k+)
    #[arg(long)]
    pub(crate) budget: Option<String>,
    /// Timeline (1-2-weeks, 1-month, 2-3-months, 3-6-months, 6+months)
    #[arg(long)]
    pub(crate) timeline: Option<String>,
    /// Project type (ai-integration, data-analytics, web-app, ...)
    #[arg(long)]
    pub(crate) project_type: Option<String>,
    /// Free-text project description
    #[arg(long, default_value = "")]
    pub(crate) description: String,
    /// Free-text key requirements
    #[arg(long, default_value = "")]
    pub(crate) requirements: String,
    /// Optional business goals
    #[arg(long)]
    pub(crate) goals: Option<String>,
    /// Print the full result as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Overall score at which a lead is marked qualified (defaults to 70)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) qualified_threshold: Option<u8>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let json = args.json;
    let form = load_form(args)?;
    let result = ScoringEngine::standard().score(&form);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_qualification(&result);
    }

    Ok(())
}

pub(crate) fn load_form(args: ScoreArgs) -> Result<IntakeFormData, AppError> {
    if let Some(path) = args.file {
        let reader = BufReader::new(File::open(path)?);
        return Ok(serde_json::from_reader(reader)?);
    }

    Ok(IntakeFormData {
        budget_range: FormChoice::from_wire(args.budget.unwrap_or_default()),
        timeline: FormChoice::from_wire(args.timeline.unwrap_or_default()),
        project_type: FormChoice::from_wire(args.project_type.unwrap_or_default()),
        project_description: args.description,
        key_requirements: args.requirements,
        business_goals: args.goals,
    })
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let mut policy = QualificationPolicy::default();
    if let Some(threshold) = args.qualified_threshold {
        policy.qualified_threshold = threshold;
    }

    let repository = Arc::new(InMemoryIntakeRepository::default());
    let service = LeadIntakeService::new(
        repository.clone(),
        Arc::new(ScoringEngine::standard()),
        policy,
    );

    println!("Lead qualification demo");
    println!(
        "Leads scoring {} or higher are marked qualified",
        policy.qualified_threshold
    );

    for submission in demo_submissions() {
        let company = submission.company_name.clone();
        let record = match service.submit(submission) {
            Ok(record) => record,
            Err(err) => {
                println!("\n{company}: submission rejected ({err})");
                continue;
            }
        };

        let view = record.status_view();
        println!(
            "\n{} [{}] -> status {}",
            view.company_name, view.intake_id.0, view.status
        );
        if let Some(result) = &record.qualification {
            render_qualification(result);
        }
    }

    let stored = repository.all()?;
    println!("\nStored intake records: {}", stored.len());

    Ok(())
}

fn demo_submissions() -> Vec<IntakeSubmission> {
    vec![
        IntakeSubmission {
            company_name: "Helios Analytics".to_string(),
            contact_name: "Priya Natarajan".to_string(),
            contact_email: "priya@helios.example".to_string(),
            form: IntakeFormData {
                budget_range: FormChoice::from_wire("100k+"),
                timeline: FormChoice::from_wire("6+months"),
                project_type: FormChoice::from_wire("ai-integration"),
                project_description: "building a scalable real-time AI platform".to_string(),
                key_requirements: "increase revenue through automation".to_string(),
                business_goals: Some("expand into two new markets".to_string()),
            },
        },
        IntakeSubmission {
            company_name: "Brightside Dental".to_string(),
            contact_name: "Marco Ruiz".to_string(),
            contact_email: "marco@brightside.example".to_string(),
            form: IntakeFormData {
                budget_range: FormChoice::from_wire("25k-50k"),
                timeline: FormChoice::from_wire("2-3-months"),
                project_type: FormChoice::from_wire("web-app"),
                project_description: "patient booking portal".to_string(),
                key_requirements: "online scheduling and reminders".to_string(),
                business_goals: None,
            },
        },
        IntakeSubmission {
            company_name: "Corner Bakery".to_string(),
            contact_name: "Jo Park".to_string(),
            contact_email: "jo@cornerbakery.example".to_string(),
            form: IntakeFormData {
                budget_range: FormChoice::from_wire("under-10k"),
                timeline: FormChoice::from_wire("1-2-weeks"),
                project_type: FormChoice::from_wire("other"),
                project_description: "refresh the menu page".to_string(),
                key_requirements: String::new(),
                business_goals: None,
            },
        },
    ]
}

pub(crate) fn render_qualification(result: &QualificationResult) {
    println!("Qualification: {}", result.summary());
    println!("Recommended approach: {}", result.recommended_approach);
    println!(
        "Market fit {} | Technical feasibility {} | Estimated duration {}",
        result.analysis.market_fit.label(),
        result.analysis.technical_feasibility.label(),
        result.estimated_project_duration
    );

    println!("Component scores");
    for component in &result.components {
        println!(
            "- {} {} (weight {}%): {}",
            component.factor.label(),
            component.score,
            component.weight_pct,
            component.notes
        );
    }

    print_list("Strengths", &result.analysis.strengths);
    print_list("Concerns", &result.analysis.concerns);
    print_list("Risk factors", &result.risk_factors);
    print_list("Opportunities", &result.opportunity_factors);

    println!("Next steps");
    for (index, step) in result.next_steps.iter().enumerate() {
        println!("{}. {}", index + 1, step);
    }
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        println!("{title}: none");
        return;
    }

    println!("{title}");
    for item in items {
        println!("- {item}");
    }
}
