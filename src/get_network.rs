use crate::{load_root, load_stations, Error, Gateway, Root, Station};

impl Gateway {
    /// Fetch and fully map one network.
    pub async fn get_network(&self, network: &str) -> Result<Root, Error> {
        //https://api.citybik.es/v2/networks/cyclopolis-rhodes

        let url = self.network_url(network);
        let text = self.get_document(&url).await?;
        load_root(&text)
    }

    /// Fetch one network and map only its station list.
    pub async fn get_stations(&self, network: &str) -> Result<Vec<Station>, Error> {
        let url = self.network_url(network);
        let text = self.get_document(&url).await?;
        load_stations(&text)
    }
}
