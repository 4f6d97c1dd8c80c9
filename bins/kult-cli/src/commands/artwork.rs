//! Artwork commands.

use crate::client::KultClient;
use crate::types::{AddOutcome, Artwork, ArtworkInput};
use kult_common::{ArtworkKind, normalize_rating};

/// Field overrides for `artwork update`.
#[derive(Debug, Default)]
pub struct ArtworkChanges {
    pub name: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub kind: Option<ArtworkKind>,
    pub description: Option<String>,
    pub rating: Option<i64>,
}

impl ArtworkChanges {
    fn apply(self, input: &mut ArtworkInput) -> anyhow::Result<()> {
        if let Some(name) = self.name {
            input.name = name;
        }
        if let Some(author) = self.author {
            input.author = author;
        }
        if let Some(year) = self.year {
            input.publication_year = year;
        }
        if let Some(kind) = self.kind {
            input.kind = kind;
        }
        if let Some(description) = self.description {
            input.description = Some(description).filter(|d| !d.is_empty());
        }
        if self.rating.is_some() {
            input.rating = normalize_rating(self.rating)?;
        }
        Ok(())
    }
}

pub fn print_artwork(artwork: &Artwork) {
    println!("  ID:          {}", artwork.id);
    println!("  Name:        {}", artwork.name);
    println!("  Author:      {}", artwork.author);
    println!("  Year:        {}", artwork.publication_year);
    println!("  Type:        {}", artwork.kind);
    if let Some(description) = &artwork.description {
        println!("  Description: {}", description);
    }
    if let Some(rating) = artwork.rating {
        println!("  Rating:      {}/5", rating);
    }
    println!("  Added:       {}", artwork.added_at);
}

pub async fn add(address: &str, input: ArtworkInput, client: &KultClient) -> anyhow::Result<()> {
    match client.add_artwork(address, &input).await? {
        AddOutcome::Added(artwork) => {
            println!("Artwork added:");
            print_artwork(&artwork);
        }
        AddOutcome::AlreadyOwned { id } => {
            println!("Artwork already exists in your collection (ID {})", id);
        }
    }
    Ok(())
}

pub async fn list(
    address: &str,
    kind: Option<ArtworkKind>,
    client: &KultClient,
) -> anyhow::Result<()> {
    let response = client.list_artworks(address, kind).await?;

    if response.artworks.is_empty() {
        println!("No artworks in collection");
        return Ok(());
    }

    println!("Artworks ({}):", response.count);
    for artwork in response.artworks {
        let rating = artwork
            .rating
            .map(|r| format!(" [{}/5]", r))
            .unwrap_or_default();
        println!(
            "  {} - {} by {} ({}, {}){}",
            artwork.id, artwork.name, artwork.author, artwork.kind, artwork.publication_year, rating
        );
    }
    Ok(())
}

pub async fn show(id: i64, client: &KultClient) -> anyhow::Result<()> {
    let artwork = client.get_shared_artwork(id).await?;
    println!("Artwork:");
    print_artwork(&artwork);
    Ok(())
}

/// Update replaces every editable field, so unchanged fields are taken from
/// the current record.
pub async fn update(
    id: i64,
    address: &str,
    changes: ArtworkChanges,
    client: &KultClient,
) -> anyhow::Result<()> {
    let current = client.get_shared_artwork(id).await?;
    let mut input = current.to_input();
    changes.apply(&mut input)?;

    let artwork = client.update_artwork(id, address, &input).await?;
    println!("Artwork updated:");
    print_artwork(&artwork);
    Ok(())
}

pub async fn delete(id: i64, address: &str, client: &KultClient) -> anyhow::Result<()> {
    let message = client.delete_artwork(id, address).await?;
    println!("{}", message);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ArtworkInput {
        ArtworkInput {
            name: "Dune".into(),
            author: "Frank Herbert".into(),
            publication_year: 1965,
            kind: ArtworkKind::Book,
            description: Some("Spice".into()),
            rating: Some(4),
        }
    }

    #[test]
    fn test_changes_keep_untouched_fields() {
        let mut i = input();
        ArtworkChanges {
            rating: Some(5),
            ..Default::default()
        }
        .apply(&mut i)
        .unwrap();

        assert_eq!(i.rating, Some(5));
        assert_eq!(i.name, "Dune");
        assert_eq!(i.description.as_deref(), Some("Spice"));
    }

    #[test]
    fn test_empty_description_and_zero_rating_clear() {
        let mut i = input();
        ArtworkChanges {
            description: Some(String::new()),
            rating: Some(0),
            ..Default::default()
        }
        .apply(&mut i)
        .unwrap();

        assert_eq!(i.description, None);
        assert_eq!(i.rating, None);
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let mut i = input();
        let result = ArtworkChanges {
            rating: Some(9),
            ..Default::default()
        }
        .apply(&mut i);
        assert!(result.is_err());
    }
}
