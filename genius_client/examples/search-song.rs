#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = std::env::args().collect::<Vec<_>>();

    if args.len() < 3 {
        println!("Please specify the artist and the song title as the two arguments");
        std::process::exit(1);
    }
    let Ok(token) = std::env::var("GENIUS_TOKEN") else {
        println!("Please set the GENIUS_TOKEN environment variable");
        std::process::exit(1);
    };

    let client = genius_client::Client::new(token)?;

    let Some(artist) = client.search_artist(&args[1]).await? else {
        println!("Artist '{}' was not found", args[1]);
        return Ok(());
    };
    let Some(song) = client.search_song(&args[2], &artist.name).await? else {
        println!("Song '{}' by {} was not found", args[2], artist.name);
        return Ok(());
    };
    let lyric = client.get_lyric(&song).await?;
    println!("{} by {}'s lyric:\n{lyric}", song.title, song.artist);

    Ok(())
}
