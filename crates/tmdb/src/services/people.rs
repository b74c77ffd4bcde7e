//! People service (`person/...` endpoints).

use entities::{Person, PersonCredits, PersonId, PersonIds, PersonImages, PersonResultsPage};

use crate::client::Tmdb;
use crate::error::Result;
use crate::request::ApiRequest;

pub struct PeopleService<'a> {
    tmdb: &'a Tmdb,
}

impl<'a> PeopleService<'a> {
    pub(crate) fn new(tmdb: &'a Tmdb) -> Self {
        Self { tmdb }
    }

    /// Primary information about a person
    pub async fn summary(&self, id: PersonId) -> Result<Person> {
        self.tmdb.get(ApiRequest::new(format!("person/{id}"))).await
    }

    /// Movie cast and crew credits
    pub async fn movie_credits(&self, id: PersonId, language: Option<&str>) -> Result<PersonCredits> {
        self.credits(id, "movie_credits", language).await
    }

    /// TV cast and crew credits; cast entries carry `episode_count`
    pub async fn tv_credits(&self, id: PersonId, language: Option<&str>) -> Result<PersonCredits> {
        self.credits(id, "tv_credits", language).await
    }

    /// Movie and TV credits in one list, tagged with `media_type`
    pub async fn combined_credits(
        &self,
        id: PersonId,
        language: Option<&str>,
    ) -> Result<PersonCredits> {
        self.credits(id, "combined_credits", language).await
    }

    /// IMDb, Freebase, TVRage and social ids
    pub async fn external_ids(&self, id: PersonId) -> Result<PersonIds> {
        self.tmdb
            .get(ApiRequest::new(format!("person/{id}/external_ids")))
            .await
    }

    pub async fn images(&self, id: PersonId) -> Result<PersonImages> {
        self.tmdb
            .get(ApiRequest::new(format!("person/{id}/images")))
            .await
    }

    pub async fn popular(&self, page: Option<u32>) -> Result<PersonResultsPage> {
        self.tmdb
            .get(ApiRequest::new("person/popular").page(page))
            .await
    }

    /// Most recently created person. Often sparsely filled.
    pub async fn latest(&self) -> Result<Person> {
        self.tmdb.get(ApiRequest::new("person/latest")).await
    }

    async fn credits(
        &self,
        id: PersonId,
        kind: &str,
        language: Option<&str>,
    ) -> Result<PersonCredits> {
        let request = ApiRequest::new(format!("person/{id}/{kind}")).language(language);
        self.tmdb.get(request).await
    }
}
