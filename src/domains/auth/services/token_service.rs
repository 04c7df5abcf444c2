// src/domains/auth/services/token_service.rs
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;
use crate::domains::auth::models::{Claims, Subject, TokenKind};
use crate::shared::errors::TokenError;

/// 발급된 토큰 (문자열 + 디코딩된 claims)
/// An issued token together with the claims it encodes
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: Claims,
}

/// 토큰 서비스 (HS256, 공유 비밀키)
/// Token codec: signs and verifies claims with a single shared secret.
///
/// 부수효과 없음. 비밀키와 현재 시각에 대해서만 동작합니다.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Token Service 생성
    /// Create token service
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // 만료는 verify_at에서 직접 검사 (leeway 0)
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Refresh Token 발급 (세션 ID = 자신의 jti)
    /// Issue a refresh token; its id becomes the session id
    pub fn issue_refresh(&self, subject: &Subject, ttl: Duration) -> Result<IssuedToken, TokenError> {
        self.issue_at(subject, TokenKind::Refresh, None, ttl, Utc::now())
    }

    /// Access Token 발급 (세션에 묶임)
    /// Issue an access token bound to an existing session
    pub fn issue_access(
        &self,
        subject: &Subject,
        session_id: &str,
        ttl: Duration,
    ) -> Result<IssuedToken, TokenError> {
        self.issue_at(subject, TokenKind::Access, Some(session_id), ttl, Utc::now())
    }

    /// 지정된 시각 기준으로 토큰 발급
    /// Issue a token as of `now`. Every call mints a fresh jti.
    pub fn issue_at(
        &self,
        subject: &Subject,
        kind: TokenKind,
        session_id: Option<&str>,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        if ttl <= Duration::zero() {
            return Err(TokenError::InvalidDuration);
        }

        // exp는 초 단위이므로 1초 미만 나머지는 올림
        let mut ttl_secs = ttl.num_seconds();
        if ttl > Duration::seconds(ttl_secs) {
            ttl_secs += 1;
        }

        let jti = Uuid::new_v4().to_string();
        let iat = now.timestamp();
        let claims = Claims {
            user_id: subject.user_id,
            email: subject.email.clone(),
            is_admin: subject.is_admin,
            sid: session_id.map(str::to_string).unwrap_or_else(|| jti.clone()),
            jti,
            kind,
            iat,
            exp: iat + ttl_secs,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                tracing::error!(error = %e, "Token encoding failed");
                TokenError::Encoding(e.to_string())
            })?;

        Ok(IssuedToken { token, claims })
    }

    /// 토큰 검증 (서명 + 만료)
    /// Verify signature and expiry against the current time
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Access Token만 허용
    /// Verify and require an access token (used by the request gate)
    pub fn verify_access(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = self.verify(token)?;
        if claims.kind != TokenKind::Access {
            return Err(TokenError::WrongKind);
        }
        Ok(claims)
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            }
        })?;

        // 서명이 유효해도 만료는 별도로 검사
        if now.timestamp() >= data.claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }
}
