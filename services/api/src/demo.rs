use crate::infra::{seed_demo_board, InMemoryBoardStore, InMemorySessions};
use clap::Args;
use job_board::board::insights::JobInsightsService;
use job_board::error::AppError;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Request insights as the company owner instead of a shortlisted applicant
    #[arg(long)]
    pub(crate) as_owner: bool,
}

/// Seed the in-memory board and print one insights report to stdout.
pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let store = Arc::new(InMemoryBoardStore::default());
    let sessions = Arc::new(InMemorySessions::default());
    let fixture = seed_demo_board(&store, &sessions);

    let service = JobInsightsService::new(store.clone(), store, sessions);
    let (token, role) = if args.as_owner {
        (fixture.owner_token, "company owner")
    } else {
        (fixture.applicant_token, "applicant")
    };

    println!("Job board demo");
    println!("  Company page:      /companies/{}", fixture.company_id.0);
    println!(
        "  Insights endpoint: /api/v1/jobs/{}/insights (as {role})",
        fixture.job_id.0
    );

    match service.insights(Some(token), &fixture.job_id.0).await {
        Ok(insights) => {
            println!("\nInsights for {}", fixture.job_id.0);
            println!("  Total applicants:        {}", insights.total_applicants);
            println!(
                "  With similar skills:     {}",
                insights.applicants_with_similar_skills
            );
            println!("  Your skill match:        {}%", insights.user_skill_match);
            println!(
                "  Average experience:      {} years",
                insights.average_experience
            );
            let status = &insights.application_status;
            println!(
                "  Status breakdown:        pending {}, reviewing {}, shortlisted {}, rejected {}",
                status.pending, status.reviewing, status.shortlisted, status.rejected
            );
        }
        Err(err) => println!("\nInsights unavailable: {err}"),
    }

    Ok(())
}
