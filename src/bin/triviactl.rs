use diesel::pg::PgConnection;
use diesel::prelude::*;
use dotenv::dotenv;
use exitfailure::ExitFailure;
use failure::ResultExt;
use std::collections::HashSet;
use structopt::StructOpt;
use trivia::actions;
use trivia::models::NewQuestion;

const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[derive(StructOpt)]
enum Command {
    /// List all questions
    Questions,
    /// List all categories
    Categories,
    /// Add a category
    AddCategory { name: String },
    /// Add a question
    AddQuestion {
        question: String,
        answer: String,
        category: i32,
        difficulty: i32,
    },
    /// Delete a question by id
    DeleteQuestion { id: i32 },
    /// Insert the stock category set, skipping ones already present
    Seed,
}

#[derive(StructOpt)]
struct Args {
    #[structopt(short, long, env = "DATABASE_URL")]
    database_url: String,
    #[structopt(subcommand)]
    command: Command,
}

fn main() -> Result<(), ExitFailure> {
    let _ = dotenv();
    let args = Args::from_args();
    let db = PgConnection::establish(&args.database_url).context("unable to connect database")?;
    match args.command {
        Command::Questions => questions(&db)?,
        Command::Categories => categories(&db)?,
        Command::AddCategory { name } => add_category(&db, &name)?,
        Command::AddQuestion {
            question,
            answer,
            category,
            difficulty,
        } => add_question(&db, &question, &answer, category, difficulty)?,
        Command::DeleteQuestion { id } => delete_question(&db, id)?,
        Command::Seed => seed(&db)?,
    }
    Ok(())
}

fn questions(db: &PgConnection) -> Result<(), failure::Error> {
    for q in actions::questions_ordered(db).context("unable to get questions")? {
        println!(
            "{} [category {}, difficulty {}] {} ({})",
            q.id, q.category, q.difficulty, q.question, q.answer
        );
    }
    Ok(())
}

fn categories(db: &PgConnection) -> Result<(), failure::Error> {
    for c in actions::categories_ordered(db).context("unable to get categories")? {
        println!("{} ({})", c.id, c.type_);
    }
    Ok(())
}

fn add_category(db: &PgConnection, name: &str) -> Result<(), failure::Error> {
    let cat = actions::insert_category(db, name)?;
    println!("{} ({})", cat.id, cat.type_);
    Ok(())
}

fn add_question(
    db: &PgConnection,
    question: &str,
    answer: &str,
    category: i32,
    difficulty: i32,
) -> Result<(), failure::Error> {
    if actions::category_by_id(db, category)?.is_none() {
        return Err(failure::format_err!("no category with id {}", category));
    }
    let q = actions::insert_question(
        db,
        &NewQuestion {
            question,
            answer,
            category,
            difficulty,
        },
    )?;
    println!("{}", q.id);
    Ok(())
}

fn delete_question(db: &PgConnection, id: i32) -> Result<(), failure::Error> {
    let n = actions::delete_question(db, id)?;
    if n == 0 {
        return Err(failure::format_err!("no question with id {}", id));
    }
    Ok(())
}

fn seed(db: &PgConnection) -> Result<(), failure::Error> {
    let existing = actions::categories_ordered(db)?
        .into_iter()
        .map(|c| c.type_)
        .collect::<HashSet<_>>();
    for name in &DEFAULT_CATEGORIES {
        if !existing.contains(*name) {
            let cat = actions::insert_category(db, name)?;
            println!("{} ({})", cat.id, cat.type_);
        }
    }
    Ok(())
}
