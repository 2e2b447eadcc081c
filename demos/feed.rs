use civic::services::{InitiativeService, PostService};
use civic::Civic;

#[tokio::main]
async fn main() {
    _ = simple_logger::init_with_env();

    let client = match Civic::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let session = match client.connect() {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    match PostService::new(&session).list(1, 10).await {
        Ok(posts) => {
            for post in posts {
                println!("@{}: {} ({} likes)", post.author.username(), post.content, post.likes);
            }
        }
        Err(e) => eprintln!("Could not load posts: {}", e.message()),
    }

    match InitiativeService::new(&session).list(1, 5).await {
        Ok(initiatives) => {
            for initiative in initiatives {
                println!("[{}] {}", initiative.id, initiative.title);
            }
        }
        Err(e) => eprintln!("Could not load initiatives: {}", e.message()),
    }
}
