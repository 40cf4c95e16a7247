//! Avatar URL resolution

use repbot_core::value_objects::UserId;
use repbot_core::TransportResult;
use tracing::{instrument, warn};

use super::context::ServiceContext;

pub struct AvatarResolver<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AvatarResolver<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Download URL of the user's newest profile photo, or `""`.
    ///
    /// Never fails: transport errors degrade to an empty string.
    #[instrument(skip(self))]
    pub async fn resolve(&self, user_id: UserId) -> String {
        match self.lookup(user_id).await {
            Ok(url) => url.unwrap_or_default(),
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Failed to resolve avatar");
                String::new()
            }
        }
    }

    async fn lookup(&self, user_id: UserId) -> TransportResult<Option<String>> {
        let transport = self.ctx.transport();

        let photos = transport.get_user_profile_photos(user_id).await?;
        let Some(size) = photos.first().and_then(|sizes| sizes.first()) else {
            return Ok(None);
        };

        let file = transport.get_file(&size.file_id).await?;
        Ok(file.file_path.map(|path| transport.file_url(&path)))
    }
}
