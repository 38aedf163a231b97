use std::sync::Arc;

use macetero_api::models::{self as dto, TipoMedida, ZonaSensor};

use crate::configs::Storage;
use crate::errors::ApiError;
use crate::models::ConsejoPlanta;
use crate::repositories::{ConsejoPlantaRepository, FiltroConsejo};

pub struct ConsejoPlantaService {
    storage: Arc<Storage>,
    consejo_planta_repository: Arc<ConsejoPlantaRepository>,
}

impl ConsejoPlantaService {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self {
            consejo_planta_repository: Arc::new(ConsejoPlantaRepository::new(storage.clone())),
            storage,
        }
    }

    fn to_dto(consejos: Vec<ConsejoPlanta>) -> Vec<dto::ConsejoPlanta> {
        consejos.into_iter().map(Into::into).collect()
    }

    pub async fn create(&self, consejo: dto::ConsejoPlanta) -> Result<dto::ConsejoPlanta, ApiError> {
        let item = ConsejoPlanta::from(consejo);

        let mut tx = self.storage.begin().await?;
        self.consejo_planta_repository.create(&item, &mut tx).await?;
        tx.commit().await?;

        tracing::debug!(
            planta = %item.nombre_planta,
            zona = %item.zona_consejo,
            medida = %item.tipo_medida,
            "advice created"
        );

        self.get(&item.nombre_planta, item.zona_consejo, item.tipo_medida)
            .await
    }

    pub async fn get(
        &self,
        nombre_planta: &str,
        zona: ZonaSensor,
        tipo: TipoMedida,
    ) -> Result<dto::ConsejoPlanta, ApiError> {
        Ok(self
            .consejo_planta_repository
            .get(nombre_planta, zona, tipo)
            .await?
            .into())
    }

    pub async fn exists(
        &self,
        nombre_planta: &str,
        zona: ZonaSensor,
        tipo: TipoMedida,
    ) -> Result<bool, ApiError> {
        Ok(self
            .consejo_planta_repository
            .exists(nombre_planta, zona, tipo)
            .await?)
    }

    pub async fn list(&self, filtro: &FiltroConsejo) -> Result<Vec<dto::ConsejoPlanta>, ApiError> {
        Ok(Self::to_dto(self.consejo_planta_repository.list(filtro).await?))
    }

    pub async fn list_all(&self) -> Result<Vec<dto::ConsejoPlanta>, ApiError> {
        Ok(Self::to_dto(self.consejo_planta_repository.list_all().await?))
    }

    pub async fn list_all_from_plant(
        &self,
        nombre_planta: &str,
    ) -> Result<Vec<dto::ConsejoPlanta>, ApiError> {
        Ok(Self::to_dto(
            self.consejo_planta_repository
                .list_all_from_plant(nombre_planta)
                .await?,
        ))
    }

    pub async fn list_all_from_zone(
        &self,
        zona: ZonaSensor,
    ) -> Result<Vec<dto::ConsejoPlanta>, ApiError> {
        Ok(Self::to_dto(
            self.consejo_planta_repository.list_all_from_zone(zona).await?,
        ))
    }

    pub async fn list_all_from_tipo_medida(
        &self,
        tipo: TipoMedida,
    ) -> Result<Vec<dto::ConsejoPlanta>, ApiError> {
        Ok(Self::to_dto(
            self.consejo_planta_repository
                .list_all_from_tipo_medida(tipo)
                .await?,
        ))
    }

    pub async fn list_all_from_plant_and_zone(
        &self,
        nombre_planta: &str,
        zona: ZonaSensor,
    ) -> Result<Vec<dto::ConsejoPlanta>, ApiError> {
        Ok(Self::to_dto(
            self.consejo_planta_repository
                .list_all_from_plant_and_zone(nombre_planta, zona)
                .await?,
        ))
    }

    pub async fn list_all_from_plant_and_tipo_medida(
        &self,
        nombre_planta: &str,
        tipo: TipoMedida,
    ) -> Result<Vec<dto::ConsejoPlanta>, ApiError> {
        Ok(Self::to_dto(
            self.consejo_planta_repository
                .list_all_from_plant_and_tipo_medida(nombre_planta, tipo)
                .await?,
        ))
    }

    pub async fn update(&self, consejo: dto::ConsejoPlanta) -> Result<dto::ConsejoPlanta, ApiError> {
        let item = ConsejoPlanta::from(consejo);

        let mut tx = self.storage.begin().await?;
        let updated = self.consejo_planta_repository.update(&item, &mut tx).await?;
        tx.commit().await?;

        Ok(updated.into())
    }

    pub async fn delete(
        &self,
        nombre_planta: &str,
        zona: ZonaSensor,
        tipo: TipoMedida,
    ) -> Result<(), ApiError> {
        let mut tx = self.storage.begin().await?;
        self.consejo_planta_repository
            .delete(nombre_planta, zona, tipo, &mut tx)
            .await?;
        tx.commit().await?;

        tracing::debug!(planta = %nombre_planta, zona = %zona, medida = %tipo, "advice deleted");

        Ok(())
    }
}
