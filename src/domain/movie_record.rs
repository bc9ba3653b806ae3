/// The fixed record embedded and searched by the `/movies` endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    pub year: u32,
    pub genre: String,
    pub box_office: u64,
    pub summary: String,
}

impl MovieRecord {
    pub fn featured() -> Self {
        Self {
            id: "13".to_string(),
            title: "Barbie".to_string(),
            year: 2023,
            genre: "Fantasy/Adventure".to_string(),
            box_office: 1_441_724_962,
            summary: "A live-action film centered around Barbie and her adventures \
                      in the real world, after being expelled from Barbieland for not \
                      being perfect enough. Margot Robbie stars as the iconic doll."
                .to_string(),
        }
    }

    /// Flat text form fed to the embedder.
    pub fn embedding_text(&self) -> String {
        format!(
            "Title: {}\nYear: {}\nGenre: {}\nBox Office: ${}\nSummary: {}",
            self.title, self.year, self.genre, self.box_office, self.summary
        )
    }
}
